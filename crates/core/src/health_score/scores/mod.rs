//! Sub-score calculations.
//!
//! Each sub-score blends several 0-100 signals, scales the blend by the
//! sub-score's weight and rounds it, so the four results sum directly to
//! the 0-100 total.

pub mod best_practices;
pub mod diversification;
pub mod performance;
pub mod risk;

pub use best_practices::score_best_practices;
pub use diversification::score_diversification;
pub use performance::score_performance;
pub use risk::score_risk;

use crate::holdings::Holding;

/// Portfolio-wide totals shared by several sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioTotals {
    pub market_value: f64,
    pub cost_basis: f64,
    /// Largest single position as a percent of `market_value` (0 when empty)
    pub max_position_pct: f64,
}

impl PortfolioTotals {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let market_value: f64 = holdings.iter().map(Holding::market_value).sum();
        let cost_basis: f64 = holdings.iter().map(Holding::cost_basis).sum();

        let max_position_pct = if market_value > 0.0 {
            let largest = holdings
                .iter()
                .map(Holding::market_value)
                .fold(0.0_f64, f64::max);
            largest / market_value * 100.0
        } else {
            0.0
        };

        Self {
            market_value,
            cost_basis,
            max_position_pct,
        }
    }
}

/// Scales a 0-100 blend by its sub-score weight and rounds to whole points.
pub(crate) fn weighted_points(blend: f64, weight: f64) -> u32 {
    (blend * weight).round().clamp(0.0, 100.0) as u32
}
