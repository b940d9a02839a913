//! Risk profile domain models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Stated risk tolerance of an investor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        }
    }

    /// Inclusive range of weighted-average volatility expected for this tier.
    pub const fn expected_volatility_range(&self) -> (f64, f64) {
        match self {
            RiskTolerance::Conservative => (0.0, 1.5),
            RiskTolerance::Moderate => (1.0, 3.0),
            RiskTolerance::Aggressive => (2.0, 5.0),
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskTolerance {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            _ => Err(ValidationError::UnknownVariant {
                kind: "risk tolerance",
                value: s.to_string(),
            }),
        }
    }
}

/// Investor risk profile as captured by the profile questionnaire.
///
/// Both fields are optional: a user who never completed the questionnaire
/// still gets a profile row, just an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    #[serde(default)]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(default)]
    pub has_emergency_fund: Option<bool>,
}

impl RiskProfile {
    pub fn new(risk_tolerance: RiskTolerance) -> Self {
        Self {
            risk_tolerance: Some(risk_tolerance),
            has_emergency_fund: None,
        }
    }

    pub fn with_emergency_fund(mut self, has_emergency_fund: bool) -> Self {
        self.has_emergency_fund = Some(has_emergency_fund);
        self
    }

    pub fn reports_emergency_fund(&self) -> bool {
        self.has_emergency_fund.unwrap_or(false)
    }
}
