//! Tail selection for p-value computation

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis tail.
///
/// One-sided p-values test in the direction of the observed difference of
/// the order-first member of a pair (A minus B), and equal half the
/// two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    #[default]
    TwoSided,
    OneSided,
}

impl Tail {
    /// Convert a two-sided p-value to this tail.
    pub fn from_two_sided(&self, p_two: f64) -> f64 {
        match self {
            Tail::TwoSided => p_two,
            Tail::OneSided => p_two / 2.0,
        }
    }
}

impl FromStr for Tail {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" => Ok(Tail::TwoSided),
            "one-sided" => Ok(Tail::OneSided),
            other => Err(Error::unknown_variant(
                "tail",
                other,
                "two-sided, one-sided",
            )),
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tail::TwoSided => write!(f, "two-sided"),
            Tail::OneSided => write!(f, "one-sided"),
        }
    }
}
