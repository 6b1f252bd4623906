//! Student, Welch and paired t-tests

use pairwise_core::{mean, sample_var, Error, Result, Tail};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// A computed t statistic with its degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    pub t: f64,
    pub df: f64,
}

impl TTest {
    /// Tail-aware p-value for this statistic.
    pub fn p_value(&self, tail: Tail) -> f64 {
        t_pvalue(self.t, self.df, tail)
    }
}

/// Two-sided or one-sided p-value for a t statistic.
pub fn t_pvalue(t: f64, df: f64, tail: Tail) -> f64 {
    let dist = StudentsT::new(0.0, 1.0, df).expect("positive degrees of freedom");
    let p_two = 2.0 * (1.0 - dist.cdf(t.abs()));
    tail.from_two_sided(p_two.min(1.0))
}

fn check_sizes(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() < 2 || y.len() < 2 {
        return Err(Error::too_few(2, x.len().min(y.len())));
    }
    Ok(())
}

/// Independent two-sample t-test with pooled variance, df = n1 + n2 - 2.
pub fn student_t(x: &[f64], y: &[f64]) -> Result<TTest> {
    check_sizes(x, y)?;
    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let df = nx + ny - 2.0;
    let pooled_var = ((nx - 1.0) * sample_var(x) + (ny - 1.0) * sample_var(y)) / df;
    let se = (pooled_var * (1.0 / nx + 1.0 / ny)).sqrt();
    if se == 0.0 {
        return Err(Error::Computation(
            "both samples have zero variance".to_string(),
        ));
    }
    Ok(TTest {
        t: (mean(x) - mean(y)) / se,
        df,
    })
}

/// Independent two-sample t-test with per-group variances and
/// Welch-Satterthwaite degrees of freedom.
pub fn welch_t(x: &[f64], y: &[f64]) -> Result<TTest> {
    check_sizes(x, y)?;
    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let (vx, vy) = (sample_var(x) / nx, sample_var(y) / ny);
    let se2 = vx + vy;
    if se2 == 0.0 {
        return Err(Error::Computation(
            "both samples have zero variance".to_string(),
        ));
    }
    let df = se2 * se2 / (vx * vx / (nx - 1.0) + vy * vy / (ny - 1.0));
    Ok(TTest {
        t: (mean(x) - mean(y)) / se2.sqrt(),
        df,
    })
}

/// Paired t-test on aligned samples, df = n - 1.
pub fn paired_t(x: &[f64], y: &[f64]) -> Result<TTest> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "paired samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(Error::too_few(2, x.len()));
    }
    let diffs: Vec<f64> = x.iter().zip(y.iter()).map(|(&a, &b)| a - b).collect();
    let n = diffs.len() as f64;
    let sd = sample_var(&diffs).sqrt();
    if sd == 0.0 {
        return Err(Error::Computation(
            "paired differences have zero variance".to_string(),
        ));
    }
    Ok(TTest {
        t: mean(&diffs) / (sd / n.sqrt()),
        df: n - 1.0,
    })
}
