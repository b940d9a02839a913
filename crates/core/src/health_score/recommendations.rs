//! Recommendation checklist.
//!
//! Checks run in a fixed order so the most actionable advice comes first;
//! the list is then truncated to the configured maximum.

use super::model::ScoreBreakdown;

pub const ADD_HOLDINGS: &str =
    "Add more holdings: aim for at least 5 positions to spread your risk.";
pub const REDUCE_CONCENTRATION: &str =
    "Reduce concentration: your largest position is more than 30% of the portfolio.";
pub const DIVERSIFY_SECTORS: &str =
    "Diversify across sectors: your holdings cover fewer than 3 sectors.";
pub const ADD_ASSET_CLASS: &str =
    "Add another asset class, such as bonds or funds, to balance your portfolio.";
pub const COMPLETE_PROFILE: &str =
    "Complete the investor profile questionnaire so your risk alignment can be checked.";
pub const ALIGN_RISK: &str =
    "Adjust your allocation so its risk better matches your stated risk tolerance.";
pub const REVIEW_LOSERS: &str =
    "Review underperforming positions: fewer than half of your holdings are in profit.";
pub const NEGATIVE_RETURN: &str =
    "Your portfolio has a negative total return. Revisit the thesis behind your positions.";
pub const ADD_DIVIDENDS: &str =
    "Consider dividend-paying assets to build a stream of passive income.";
pub const BUILD_EMERGENCY_FUND: &str =
    "Build an emergency fund in cash before taking on more market risk.";
pub const REBALANCE: &str =
    "Rebalance your portfolio to bring your largest position back toward target.";
pub const WELL_BALANCED: &str =
    "Your portfolio is well balanced. Keep monitoring it regularly.";

const MIN_HOLDINGS: usize = 5;
const MAX_CONCENTRATION_PCT: f64 = 30.0;
const MIN_SECTORS: usize = 3;
const MIN_ASSET_CLASSES: usize = 2;
const MIN_ALIGNMENT_SCORE: f64 = 70.0;
const MIN_POSITIVE_RATIO: f64 = 50.0;

fn review_activity(recent_activity_days: u32) -> String {
    format!(
        "Review your portfolio regularly: no holdings were updated in the last {} days.",
        recent_activity_days
    )
}

/// Evaluates the checklist against a breakdown.
///
/// Always returns between 1 and `limit` messages (`limit` is raised to 1).
pub fn generate_recommendations(
    breakdown: &ScoreBreakdown,
    recent_activity_days: u32,
    limit: usize,
) -> Vec<String> {
    let diversification = &breakdown.diversification;
    let risk = &breakdown.risk_management;
    let performance = &breakdown.performance;
    let practices = &breakdown.best_practices;

    let checks = [
        (diversification.holding_count < MIN_HOLDINGS, ADD_HOLDINGS.to_string()),
        (
            diversification.max_concentration_pct > MAX_CONCENTRATION_PCT,
            REDUCE_CONCENTRATION.to_string(),
        ),
        (diversification.sector_count < MIN_SECTORS, DIVERSIFY_SECTORS.to_string()),
        (
            diversification.asset_class_count < MIN_ASSET_CLASSES,
            ADD_ASSET_CLASS.to_string(),
        ),
        (risk.risk_tolerance.is_none(), COMPLETE_PROFILE.to_string()),
        (risk.risk_alignment_score < MIN_ALIGNMENT_SCORE, ALIGN_RISK.to_string()),
        (
            performance.positive_return_ratio < MIN_POSITIVE_RATIO,
            REVIEW_LOSERS.to_string(),
        ),
        (performance.total_return_pct < 0.0, NEGATIVE_RETURN.to_string()),
        (
            performance.average_dividend_yield == 0.0 && diversification.holding_count > 0,
            ADD_DIVIDENDS.to_string(),
        ),
        (!practices.has_emergency_fund, BUILD_EMERGENCY_FUND.to_string()),
        (
            !practices.has_recent_activity,
            review_activity(recent_activity_days),
        ),
        (!practices.rebalancing_target_met, REBALANCE.to_string()),
    ];

    let mut recommendations: Vec<String> = checks
        .into_iter()
        .filter_map(|(triggered, message)| triggered.then_some(message))
        .take(limit.max(1))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(WELL_BALANCED.to_string());
    }

    recommendations
}
