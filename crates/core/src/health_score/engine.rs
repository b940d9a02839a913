//! Portfolio health score computation.
//!
//! Pure functions: the result depends only on the holdings, the optional
//! risk profile, the configuration and the reference instant.

use chrono::{DateTime, Utc};

use super::model::{HealthRating, HealthScoreConfig, HealthScoreResult, ScoreBreakdown};
use super::recommendations::generate_recommendations;
use super::scores::risk::risk_alignment_score;
use super::scores::{
    score_best_practices, score_diversification, score_performance, score_risk, PortfolioTotals,
};
use crate::constants::MAX_RECOMMENDATIONS;
use crate::holdings::Holding;
use crate::profile::RiskProfile;

/// Computes the health score as of now with the default configuration.
pub fn compute_health_score(
    holdings: &[Holding],
    risk_profile: Option<&RiskProfile>,
) -> HealthScoreResult {
    compute_health_score_at(holdings, risk_profile, Utc::now())
}

/// Computes the health score as of `now` with the default configuration.
pub fn compute_health_score_at(
    holdings: &[Holding],
    risk_profile: Option<&RiskProfile>,
    now: DateTime<Utc>,
) -> HealthScoreResult {
    compute_health_score_with_config(holdings, risk_profile, &HealthScoreConfig::default(), now)
}

/// Computes the health score with an explicit configuration and instant.
///
/// An out-of-range `max_recommendations` is clamped to 1..=5 rather than
/// rejected; use [`HealthScoreConfig::validate`] to surface it instead.
pub fn compute_health_score_with_config(
    holdings: &[Holding],
    risk_profile: Option<&RiskProfile>,
    config: &HealthScoreConfig,
    now: DateTime<Utc>,
) -> HealthScoreResult {
    let limit = config.max_recommendations.clamp(1, MAX_RECOMMENDATIONS);

    let breakdown = if holdings.is_empty() {
        // Every sub-score stays at its zero baseline, risk included. Alignment
        // is still reported for the stated tolerance.
        let tolerance = risk_profile.and_then(|p| p.risk_tolerance);
        let mut empty = ScoreBreakdown::default();
        empty.risk_management.risk_tolerance = tolerance;
        empty.risk_management.risk_alignment_score = risk_alignment_score(0.0, tolerance);
        empty
    } else {
        let totals = PortfolioTotals::from_holdings(holdings);
        ScoreBreakdown {
            diversification: score_diversification(holdings, &totals),
            risk_management: score_risk(holdings, &totals, risk_profile),
            performance: score_performance(holdings, &totals),
            best_practices: score_best_practices(
                holdings,
                &totals,
                risk_profile,
                config.recent_activity_days,
                now,
            ),
        }
    };

    let total_score = breakdown.sum().min(100);
    let rating = HealthRating::from_score(total_score);
    let recommendations =
        generate_recommendations(&breakdown, config.recent_activity_days, limit);

    HealthScoreResult {
        total_score,
        rating,
        color: rating.color(),
        breakdown,
        recommendations,
    }
}
