//! Best practices sub-score: emergency fund, recent activity and rebalancing.

use chrono::{DateTime, Duration, Utc};

use super::{weighted_points, PortfolioTotals};
use crate::constants::{BEST_PRACTICES_WEIGHT, REBALANCE_CRITICAL_PCT, REBALANCE_WARNING_PCT};
use crate::health_score::model::BestPracticesScore;
use crate::holdings::Holding;
use crate::profile::RiskProfile;

const EMERGENCY_FUND_SHARE: f64 = 0.4;
const RECENT_ACTIVITY_SHARE: f64 = 0.3;
const REBALANCING_SHARE: f64 = 0.3;

pub fn score_best_practices(
    holdings: &[Holding],
    totals: &PortfolioTotals,
    risk_profile: Option<&RiskProfile>,
    recent_activity_days: u32,
    now: DateTime<Utc>,
) -> BestPracticesScore {
    if holdings.is_empty() {
        return BestPracticesScore::default();
    }

    let has_cash = holdings
        .iter()
        .any(|h| h.asset_class.is_cash() && h.quantity > 0.0);
    let has_emergency_fund =
        has_cash || risk_profile.is_some_and(RiskProfile::reports_emergency_fund);
    let emergency_fund_score = if has_emergency_fund { 100.0 } else { 0.0 };

    let last_activity_at = holdings.iter().map(|h| h.updated_at).max();
    let window = Duration::days(i64::from(recent_activity_days));
    let has_recent_activity = holdings
        .iter()
        .any(|h| now.signed_duration_since(h.updated_at) <= window);
    let recent_activity_score = if has_recent_activity { 100.0 } else { 50.0 };

    let (rebalancing_score, rebalancing_target_met) =
        rebalancing_score(totals.max_position_pct);

    let blend = emergency_fund_score * EMERGENCY_FUND_SHARE
        + recent_activity_score * RECENT_ACTIVITY_SHARE
        + rebalancing_score * REBALANCING_SHARE;

    BestPracticesScore {
        score: weighted_points(blend, BEST_PRACTICES_WEIGHT),
        has_emergency_fund,
        emergency_fund_score,
        has_recent_activity,
        last_activity_at,
        recent_activity_score,
        rebalancing_target_met,
        rebalancing_score,
    }
}

/// Returns the rebalancing score and whether the allocation target is met.
pub fn rebalancing_score(max_position_pct: f64) -> (f64, bool) {
    if max_position_pct > REBALANCE_CRITICAL_PCT {
        (50.0, false)
    } else if max_position_pct > REBALANCE_WARNING_PCT {
        (75.0, false)
    } else {
        (100.0, true)
    }
}
