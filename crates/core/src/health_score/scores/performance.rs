//! Performance sub-score: winners ratio, portfolio return and dividend yield.

use super::{weighted_points, PortfolioTotals};
use crate::constants::PERFORMANCE_WEIGHT;
use crate::health_score::model::PerformanceScore;
use crate::holdings::Holding;

const POSITIVE_RATIO_SHARE: f64 = 0.4;
const TOTAL_RETURN_SHARE: f64 = 0.3;
const DIVIDEND_SHARE: f64 = 0.3;

pub fn score_performance(holdings: &[Holding], totals: &PortfolioTotals) -> PerformanceScore {
    if holdings.is_empty() {
        return PerformanceScore::default();
    }

    let winners = holdings.iter().filter(|h| h.has_gain()).count();
    let positive_return_ratio = winners as f64 / holdings.len() as f64 * 100.0;

    let total_return_pct = if totals.cost_basis > 0.0 {
        (totals.market_value - totals.cost_basis) / totals.cost_basis * 100.0
    } else {
        0.0
    };
    let total_return_score = total_return_score(total_return_pct);

    let yields: Vec<f64> = holdings
        .iter()
        .filter_map(|h| h.dividend_yield)
        .filter(|y| *y > 0.0)
        .collect();
    let average_dividend_yield = if yields.is_empty() {
        0.0
    } else {
        yields.iter().sum::<f64>() / yields.len() as f64
    };
    let dividend_score = dividend_yield_score(average_dividend_yield);

    let blend = positive_return_ratio * POSITIVE_RATIO_SHARE
        + total_return_score * TOTAL_RETURN_SHARE
        + dividend_score * DIVIDEND_SHARE;

    PerformanceScore {
        score: weighted_points(blend, PERFORMANCE_WEIGHT),
        positive_return_ratio,
        total_return_pct,
        total_return_score,
        dividend_paying_count: yields.len(),
        average_dividend_yield,
        dividend_score,
    }
}

/// Maps a portfolio return (percent) to 0-100, with 0% worth 50 points.
///
/// Gains earn up to 100 points by +20%; losses drain the 50 points faster
/// and reach 0 at -10%. The curve is continuous and non-decreasing.
pub fn total_return_score(return_pct: f64) -> f64 {
    if return_pct >= 20.0 {
        100.0
    } else if return_pct >= 10.0 {
        80.0 + (return_pct - 10.0) * 2.0
    } else if return_pct >= 0.0 {
        50.0 + return_pct * 3.0
    } else if return_pct >= -10.0 {
        50.0 + return_pct * 5.0
    } else {
        0.0
    }
}

pub fn dividend_yield_score(average_yield_pct: f64) -> f64 {
    if average_yield_pct >= 5.0 {
        100.0
    } else if average_yield_pct >= 3.0 {
        80.0
    } else if average_yield_pct >= 2.0 {
        60.0
    } else if average_yield_pct >= 1.0 {
        40.0
    } else if average_yield_pct > 0.0 {
        20.0
    } else {
        0.0
    }
}
