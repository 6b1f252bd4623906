//! Smoke test of the re-exported public surface

use anyhow::Result;
use approx::assert_abs_diff_eq;
use pairwise_stats::{Adjustment, CorrSpec, PairwiseStatsExt, TTestSpec, Tail};
use polars::prelude::*;

#[test]
fn test_public_surface_round_trip() -> Result<()> {
    let df = df![
        "Scores" => [4.5, 6.1, 5.2, 5.0, 7.3, 5.5, 6.8, 7.0],
        "Group" => ["A", "A", "A", "A", "B", "B", "B", "B"],
        "Covar" => [1.0, 2.0, 1.5, 2.5, 1.2, 2.2, 1.7, 2.7],
    ]?;

    let ttests = df.pairwise_ttests(
        &TTestSpec::new("Scores")
            .between("Group")
            .tail(Tail::TwoSided)
            .padjust(Adjustment::Holm),
    )?;
    assert_eq!(ttests.height(), 1);
    assert!(ttests.column("p-corr").is_ok());
    let dof = ttests.column("dof")?.f64()?.get(0).unwrap();
    assert_abs_diff_eq!(dof, 6.0, epsilon = 1e-12);

    let corr = df.pairwise_corr(&CorrSpec::new())?;
    assert_eq!(corr.height(), 1);

    let tukey = df.pairwise_tukey("Scores", "Group")?;
    assert_eq!(tukey.height(), 1);

    let gh = df.pairwise_gameshowell("Scores", "Group")?;
    assert_eq!(gh.height(), 1);
    Ok(())
}
