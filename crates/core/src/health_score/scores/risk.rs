//! Risk management sub-score: portfolio volatility and its alignment with
//! the investor's stated risk tolerance.

use super::{weighted_points, PortfolioTotals};
use crate::constants::{
    NEUTRAL_ALIGNMENT_SCORE, OVER_RISK_FLOOR, OVER_RISK_PENALTY_PER_UNIT, RISK_MANAGEMENT_WEIGHT,
    UNDER_RISK_FLOOR, UNDER_RISK_PENALTY_PER_UNIT, VOLATILITY_PENALTY_PER_UNIT,
};
use crate::health_score::model::RiskScore;
use crate::holdings::Holding;
use crate::profile::{RiskProfile, RiskTolerance};

const VOLATILITY_SHARE: f64 = 0.5;
const ALIGNMENT_SHARE: f64 = 0.5;

pub fn score_risk(
    holdings: &[Holding],
    totals: &PortfolioTotals,
    risk_profile: Option<&RiskProfile>,
) -> RiskScore {
    let weighted_volatility = weighted_volatility(holdings, totals);
    let volatility_score = volatility_score(weighted_volatility);

    let risk_tolerance = risk_profile.and_then(|p| p.risk_tolerance);
    let risk_alignment_score = risk_alignment_score(weighted_volatility, risk_tolerance);

    let blend = volatility_score * VOLATILITY_SHARE + risk_alignment_score * ALIGNMENT_SHARE;

    RiskScore {
        score: weighted_points(blend, RISK_MANAGEMENT_WEIGHT),
        weighted_volatility,
        volatility_score,
        risk_tolerance,
        risk_alignment_score,
    }
}

/// Market-value-weighted average of the asset class volatility weights.
///
/// Falls back to a plain average when the portfolio has no market value.
pub fn weighted_volatility(holdings: &[Holding], totals: &PortfolioTotals) -> f64 {
    if holdings.is_empty() {
        return 0.0;
    }

    if totals.market_value > 0.0 {
        holdings
            .iter()
            .map(|h| h.market_value() * h.asset_class.volatility_weight())
            .sum::<f64>()
            / totals.market_value
    } else {
        holdings
            .iter()
            .map(|h| h.asset_class.volatility_weight())
            .sum::<f64>()
            / holdings.len() as f64
    }
}

pub fn volatility_score(weighted_volatility: f64) -> f64 {
    (100.0 - weighted_volatility * VOLATILITY_PENALTY_PER_UNIT).clamp(0.0, 100.0)
}

/// Compares portfolio volatility with the range expected for a tolerance.
///
/// Falling short of the range is penalized gently; exceeding it is
/// penalized twice as hard with a lower floor.
pub fn risk_alignment_score(weighted_volatility: f64, tolerance: Option<RiskTolerance>) -> f64 {
    let Some(tolerance) = tolerance else {
        return NEUTRAL_ALIGNMENT_SCORE;
    };

    let (min, max) = tolerance.expected_volatility_range();
    if weighted_volatility < min {
        let shortfall = min - weighted_volatility;
        (100.0 - shortfall * UNDER_RISK_PENALTY_PER_UNIT).max(UNDER_RISK_FLOOR)
    } else if weighted_volatility > max {
        let excess = weighted_volatility - max;
        (100.0 - excess * OVER_RISK_PENALTY_PER_UNIT).max(OVER_RISK_FLOOR)
    } else {
        100.0
    }
}
