//! Effect size selection

use pairwise_core::Error;
use std::fmt;
use std::str::FromStr;

/// Effect size reported on each comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffSize {
    /// Standardized mean difference over the pooled standard deviation
    #[default]
    Cohen,
    /// Cohen's d with the small-sample bias correction
    Hedges,
    /// Proportion of variance explained
    EtaSquare,
    /// Odds ratio under the logistic approximation
    OddsRatio,
    /// Area under the ROC curve of the group-membership classifier
    Auc,
    /// Common-language effect size (probability of superiority)
    Cles,
    /// No effect size column
    None,
}

impl EffSize {
    /// Column label used in result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cohen => "cohen",
            Self::Hedges => "hedges",
            Self::EtaSquare => "eta-square",
            Self::OddsRatio => "odds-ratio",
            Self::Auc => "AUC",
            Self::Cles => "CLES",
            Self::None => "none",
        }
    }
}

impl FromStr for EffSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cohen" => Ok(Self::Cohen),
            "hedges" => Ok(Self::Hedges),
            "eta-square" => Ok(Self::EtaSquare),
            "odds-ratio" => Ok(Self::OddsRatio),
            "AUC" => Ok(Self::Auc),
            "CLES" => Ok(Self::Cles),
            "none" => Ok(Self::None),
            other => Err(Error::unknown_variant(
                "effsize",
                other,
                "cohen, hedges, eta-square, odds-ratio, AUC, CLES, none",
            )),
        }
    }
}

impl fmt::Display for EffSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips() {
        for kind in [
            EffSize::Cohen,
            EffSize::Hedges,
            EffSize::EtaSquare,
            EffSize::OddsRatio,
            EffSize::Auc,
            EffSize::Cles,
            EffSize::None,
        ] {
            assert_eq!(kind.name().parse::<EffSize>().unwrap(), kind);
        }
        assert!("glass".parse::<EffSize>().is_err());
    }
}
