//! Portfolio health score domain models.
//!
//! This module contains the value types produced by the scoring engine:
//! - Rating and color derived from the total score
//! - The four sub-score breakdowns with their diagnostic details
//! - The aggregated result
//! - Configuration for the tunable windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_RECOMMENDATIONS, RECENT_ACTIVITY_DAYS};
use crate::errors::{Error, Result};
use crate::profile::RiskTolerance;

// =============================================================================
// Rating
// =============================================================================

/// Qualitative rating of a total health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRating {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl HealthRating {
    /// Maps a total score to its rating band.
    pub fn from_score(total_score: u32) -> Self {
        match total_score {
            90.. => HealthRating::Excellent,
            75..=89 => HealthRating::VeryGood,
            60..=74 => HealthRating::Good,
            40..=59 => HealthRating::Fair,
            _ => HealthRating::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::VeryGood => "Very Good",
            HealthRating::Good => "Good",
            HealthRating::Fair => "Fair",
            HealthRating::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(&self) -> ScoreColor {
        match self {
            HealthRating::Excellent => ScoreColor::Green,
            HealthRating::VeryGood => ScoreColor::LightGreen,
            HealthRating::Good => ScoreColor::Yellow,
            HealthRating::Fair => ScoreColor::Orange,
            HealthRating::NeedsImprovement => ScoreColor::Red,
        }
    }
}

impl std::fmt::Display for HealthRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color token paired with a rating for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreColor {
    Green,
    LightGreen,
    Yellow,
    Orange,
    Red,
}

impl ScoreColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreColor::Green => "green",
            ScoreColor::LightGreen => "light-green",
            ScoreColor::Yellow => "yellow",
            ScoreColor::Orange => "orange",
            ScoreColor::Red => "red",
        }
    }
}

// =============================================================================
// Sub-score breakdowns
// =============================================================================

/// Diversification sub-score (35 points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationScore {
    /// Weighted points contributed to the total (0-35)
    pub score: u32,
    pub holding_count: usize,
    pub holding_count_score: f64,
    /// Distinct sectors, sorted
    pub sectors: Vec<String>,
    pub sector_count: usize,
    pub sector_score: f64,
    pub asset_class_count: usize,
    pub asset_class_score: f64,
    /// Largest position as a percent of total market value
    pub max_concentration_pct: f64,
    pub concentration_score: f64,
}

/// Risk management sub-score (30 points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    /// Weighted points contributed to the total (0-30)
    pub score: u32,
    /// Market-value-weighted average volatility weight
    pub weighted_volatility: f64,
    pub volatility_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
    pub risk_alignment_score: f64,
}

/// Performance sub-score (20 points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    /// Weighted points contributed to the total (0-20)
    pub score: u32,
    /// Percent of holdings currently worth more than their cost basis
    pub positive_return_ratio: f64,
    pub total_return_pct: f64,
    pub total_return_score: f64,
    pub dividend_paying_count: usize,
    pub average_dividend_yield: f64,
    pub dividend_score: f64,
}

/// Best practices sub-score (15 points).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPracticesScore {
    /// Weighted points contributed to the total (0-15)
    pub score: u32,
    pub has_emergency_fund: bool,
    pub emergency_fund_score: f64,
    pub has_recent_activity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
    pub recent_activity_score: f64,
    pub rebalancing_target_met: bool,
    pub rebalancing_score: f64,
}

/// The four sub-scores that sum to the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub diversification: DiversificationScore,
    pub risk_management: RiskScore,
    pub performance: PerformanceScore,
    pub best_practices: BestPracticesScore,
}

impl ScoreBreakdown {
    /// Sum of the weighted sub-scores.
    pub fn sum(&self) -> u32 {
        self.diversification.score
            + self.risk_management.score
            + self.performance.score
            + self.best_practices.score
    }
}

// =============================================================================
// Result
// =============================================================================

/// Portfolio health score for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreResult {
    /// 0-100
    pub total_score: u32,
    pub rating: HealthRating,
    pub color: ScoreColor,
    pub breakdown: ScoreBreakdown,
    /// One to five messages, most actionable first
    pub recommendations: Vec<String>,
}

// =============================================================================
// Config
// =============================================================================

/// Tunable parameters of the health score.
///
/// Weights and thresholds are fixed; only the activity window and the
/// recommendation cap can be adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreConfig {
    /// Trailing days within which an update counts as recent activity (default: 30)
    pub recent_activity_days: u32,

    /// Maximum number of recommendations returned (default: 5, at most 5)
    pub max_recommendations: usize,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            recent_activity_days: RECENT_ACTIVITY_DAYS,
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }
}

impl HealthScoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.recent_activity_days == 0 {
            return Err(Error::InvalidConfigValue(
                "recentActivityDays must be at least 1".to_string(),
            ));
        }
        if self.max_recommendations == 0 || self.max_recommendations > MAX_RECOMMENDATIONS {
            return Err(Error::InvalidConfigValue(format!(
                "maxRecommendations must be between 1 and {}",
                MAX_RECOMMENDATIONS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(HealthRating::from_score(100), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(90), HealthRating::Excellent);
        assert_eq!(HealthRating::from_score(89), HealthRating::VeryGood);
        assert_eq!(HealthRating::from_score(75), HealthRating::VeryGood);
        assert_eq!(HealthRating::from_score(74), HealthRating::Good);
        assert_eq!(HealthRating::from_score(60), HealthRating::Good);
        assert_eq!(HealthRating::from_score(59), HealthRating::Fair);
        assert_eq!(HealthRating::from_score(40), HealthRating::Fair);
        assert_eq!(HealthRating::from_score(39), HealthRating::NeedsImprovement);
        assert_eq!(HealthRating::from_score(0), HealthRating::NeedsImprovement);
    }

    #[test]
    fn test_rating_colors() {
        assert_eq!(HealthRating::Excellent.color(), ScoreColor::Green);
        assert_eq!(HealthRating::VeryGood.color(), ScoreColor::LightGreen);
        assert_eq!(HealthRating::Good.color(), ScoreColor::Yellow);
        assert_eq!(HealthRating::Fair.color(), ScoreColor::Orange);
        assert_eq!(HealthRating::NeedsImprovement.color(), ScoreColor::Red);
    }

    #[test]
    fn test_rating_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthRating::VeryGood).unwrap(),
            "\"Very Good\""
        );
        assert_eq!(
            serde_json::from_str::<HealthRating>("\"Needs Improvement\"").unwrap(),
            HealthRating::NeedsImprovement
        );
        assert_eq!(
            serde_json::to_string(&ScoreColor::LightGreen).unwrap(),
            "\"light-green\""
        );
        assert_eq!(ScoreColor::LightGreen.as_str(), "light-green");
    }

    #[test]
    fn test_breakdown_sum() {
        let mut breakdown = ScoreBreakdown::default();
        breakdown.diversification.score = 7;
        breakdown.risk_management.score = 14;
        breakdown.performance.score = 14;
        breakdown.best_practices.score = 7;
        assert_eq!(breakdown.sum(), 42);
    }

    #[test]
    fn test_config_defaults() {
        let config = HealthScoreConfig::default();
        assert_eq!(config.recent_activity_days, 30);
        assert_eq!(config.max_recommendations, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let zero_window = HealthScoreConfig {
            recent_activity_days: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_window.validate(),
            Err(Error::InvalidConfigValue(_))
        ));

        let too_many = HealthScoreConfig {
            max_recommendations: 6,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());

        let none = HealthScoreConfig {
            max_recommendations: 0,
            ..Default::default()
        };
        assert!(none.validate().is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let json = r#"{"recentActivityDays":14,"maxRecommendations":3}"#;
        let config: HealthScoreConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.recent_activity_days, 14);
        assert_eq!(config.max_recommendations, 3);
    }
}
