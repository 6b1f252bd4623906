//! Tie-aware ranking
//!
//! Average ranks (1-based) with ties sharing the mean of the rank positions
//! they cover, plus the tie-correction sum used by the rank-based tests.

/// Average ranks of `sample`, 1-based, ties averaged.
pub fn rankdata(sample: &[f64]) -> Vec<f64> {
    let n = sample.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        sample[i]
            .partial_cmp(&sample[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Extent of the tie group starting at sorted position i
        let mut j = i + 1;
        while j < n && sample[order[j]] == sample[order[i]] {
            j += 1;
        }
        let avg = (i + j + 1) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        i = j;
    }
    ranks
}

/// Sum of t^3 - t over tie groups, used in the variance corrections of the
/// Mann-Whitney and Wilcoxon normal approximations.
pub fn tie_term(sample: &[f64]) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut total = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        total += t * t * t - t;
        i = j;
    }
    total
}
