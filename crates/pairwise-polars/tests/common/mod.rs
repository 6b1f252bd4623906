//! Shared dataset builders for the integration tests
//!
//! All data is deterministic (trigonometric pseudo-noise) so every test run
//! sees identical tables.

use polars::prelude::*;

/// Long-format mixed design: 12 subjects split over two groups, each
/// measured at three time points.
#[allow(dead_code)]
pub fn mixed_design() -> DataFrame {
    let mut subject = Vec::new();
    let mut time = Vec::new();
    let mut group = Vec::new();
    let mut scores = Vec::new();
    for s in 0..12i64 {
        let g = if s < 6 { "Control" } else { "Meditation" };
        for (t_idx, t) in ["August", "January", "June"].iter().enumerate() {
            subject.push(s);
            time.push(*t);
            group.push(g);
            let sf = s as f64;
            let tf = t_idx as f64;
            let base = 5.0 + 0.6 * tf + if s >= 6 { 0.8 } else { 0.0 };
            scores.push(base + 0.4 * (3.7 * sf + 1.3 * tf).sin() + 0.2 * (1.9 * sf).cos());
        }
    }
    df![
        "Subject" => subject,
        "Time" => time,
        "Group" => group,
        "Scores" => scores,
    ]
    .unwrap()
}

/// Fully-crossed repeated-measures design: every subject sees all
/// combinations of two within factors.
#[allow(dead_code)]
pub fn rm_design() -> DataFrame {
    let mut subject = Vec::new();
    let mut time = Vec::new();
    let mut condition = Vec::new();
    let mut scores = Vec::new();
    for s in 0..8i64 {
        for (t_idx, t) in ["Pre", "Mid", "Post"].iter().enumerate() {
            for (c_idx, c) in ["Quiet", "Noisy"].iter().enumerate() {
                subject.push(s);
                time.push(*t);
                condition.push(*c);
                let sf = s as f64;
                scores.push(
                    4.0 + 0.5 * t_idx as f64 - 0.7 * c_idx as f64
                        + 0.3 * (2.9 * sf + 1.7 * t_idx as f64 + 0.9 * c_idx as f64).sin(),
                );
            }
        }
    }
    df![
        "Subject" => subject,
        "Time" => time,
        "Condition" => condition,
        "Scores" => scores,
    ]
    .unwrap()
}

/// Hair color / pain threshold one-way design (McClave & Dietrich), rows
/// grouped by label so first-appearance order matches label order.
#[allow(dead_code)]
pub fn pain_threshold() -> DataFrame {
    let data: [(&str, &[f64]); 4] = [
        ("Dark Blond", &[63.0, 57.0, 52.0, 41.0, 43.0]),
        ("Dark Brunette", &[32.0, 39.0, 51.0, 30.0, 35.0]),
        ("Light Blond", &[62.0, 60.0, 71.0, 55.0, 48.0]),
        ("Light Brunette", &[42.0, 50.0, 41.0, 37.0]),
    ];
    let mut color = Vec::new();
    let mut threshold = Vec::new();
    for (label, values) in data {
        for v in values {
            color.push(label);
            threshold.push(*v);
        }
    }
    df![
        "Hair color" => color,
        "Pain threshold" => threshold,
    ]
    .unwrap()
}

/// Five correlated numeric columns of length `n`, deterministic.
#[allow(dead_code)]
pub fn trait_scores(n: usize) -> DataFrame {
    let base: Vec<f64> = (0..n).map(|i| (i as f64 * 0.713).sin()).collect();
    let col = |phase: f64, weight: f64| -> Vec<f64> {
        base.iter()
            .enumerate()
            .map(|(i, b)| weight * b + ((i as f64) * phase).cos())
            .collect()
    };
    df![
        "Neuroticism" => col(0.37, 0.9),
        "Extraversion" => col(0.91, -0.6),
        "Openness" => col(1.57, 0.3),
        "Agreeableness" => col(2.23, 0.1),
        "Conscientiousness" => col(2.71, -0.2),
    ]
    .unwrap()
}
