use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProfileError;

/// Filing statuses supported by the 2025 rule set.
///
/// Each status selects its own bracket schedule, LTCG thresholds, NIIT
/// threshold, CTC phase-out threshold and standard deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 3] = [
        FilingStatus::Single,
        FilingStatus::MarriedFilingJointly,
        FilingStatus::HeadOfHousehold,
    ];

    /// Single-letter code used at the prompt (`S`, `M`, `H`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "M",
            Self::HeadOfHousehold => "H",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married",
            Self::HeadOfHousehold => "head of household",
        }
    }

    /// Parses a filing status code, ignoring case and surrounding whitespace.
    ///
    /// Accepts the prompt letters (`S`, `M`, `H`) as well as the IRS
    /// abbreviations `MFJ` and `HOH`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" | "SINGLE" => Some(Self::Single),
            "M" | "MFJ" | "MARRIED" => Some(Self::MarriedFilingJointly),
            "H" | "HOH" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}

impl FromStr for FilingStatus {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProfileError::InvalidFilingStatus(s.trim().to_string()))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
