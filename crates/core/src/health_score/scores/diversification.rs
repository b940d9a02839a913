//! Diversification sub-score: holding count, sector spread, asset class
//! spread and single-position concentration.

use std::collections::BTreeSet;

use super::{weighted_points, PortfolioTotals};
use crate::constants::{
    DIVERSIFICATION_WEIGHT, MAX_MANAGEABLE_HOLDINGS, OVER_DIVERSIFICATION_FLOOR,
    OVER_DIVERSIFICATION_PENALTY,
};
use crate::health_score::model::DiversificationScore;
use crate::health_score::sectors::resolve_sector;
use crate::holdings::Holding;

const HOLDING_COUNT_SHARE: f64 = 0.4;
const SECTOR_SHARE: f64 = 0.3;
const ASSET_CLASS_SHARE: f64 = 0.2;
const CONCENTRATION_SHARE: f64 = 0.1;

pub fn score_diversification(holdings: &[Holding], totals: &PortfolioTotals) -> DiversificationScore {
    let holding_count = holdings.len();

    let sectors: BTreeSet<&str> = holdings.iter().map(resolve_sector).collect();
    let asset_classes: BTreeSet<_> = holdings.iter().map(|h| h.asset_class).collect();

    let holding_count_score = holding_count_score(holding_count);
    let sector_score = sector_diversity_score(sectors.len());
    let asset_class_score = asset_class_diversity_score(asset_classes.len());

    // A portfolio with no market value has no meaningful concentration.
    let (max_concentration_pct, concentration_score) = if totals.market_value > 0.0 {
        (
            totals.max_position_pct,
            concentration_score(totals.max_position_pct),
        )
    } else {
        (0.0, 0.0)
    };

    let blend = holding_count_score * HOLDING_COUNT_SHARE
        + sector_score * SECTOR_SHARE
        + asset_class_score * ASSET_CLASS_SHARE
        + concentration_score * CONCENTRATION_SHARE;

    DiversificationScore {
        score: weighted_points(blend, DIVERSIFICATION_WEIGHT),
        holding_count,
        holding_count_score,
        sector_count: sectors.len(),
        sectors: sectors.into_iter().map(str::to_string).collect(),
        sector_score,
        asset_class_count: asset_classes.len(),
        asset_class_score,
        max_concentration_pct,
        concentration_score,
    }
}

/// Rewards up to twenty positions, then gently penalizes over-diversification.
pub fn holding_count_score(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1..=2 => 20.0,
        3..=4 => 40.0,
        5..=7 => 60.0,
        n if n <= MAX_MANAGEABLE_HOLDINGS => 100.0,
        n => {
            let extra = (n - MAX_MANAGEABLE_HOLDINGS) as f64;
            (100.0 - extra * OVER_DIVERSIFICATION_PENALTY).max(OVER_DIVERSIFICATION_FLOOR)
        }
    }
}

pub fn sector_diversity_score(sector_count: usize) -> f64 {
    match sector_count {
        0 => 0.0,
        1 => 20.0,
        2 => 40.0,
        3 => 60.0,
        4 => 80.0,
        _ => 100.0,
    }
}

pub fn asset_class_diversity_score(class_count: usize) -> f64 {
    match class_count {
        0 => 0.0,
        1 => 30.0,
        2 => 60.0,
        3 => 80.0,
        _ => 100.0,
    }
}

/// Scores the largest position's share (percent) of the portfolio.
pub fn concentration_score(max_position_pct: f64) -> f64 {
    if max_position_pct > 50.0 {
        0.0
    } else if max_position_pct > 40.0 {
        30.0
    } else if max_position_pct > 30.0 {
        60.0
    } else if max_position_pct > 20.0 {
        80.0
    } else {
        100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdings::AssetClass;
    use chrono::Utc;

    fn stock(ticker: &str, value: f64) -> Holding {
        Holding::new(AssetClass::Equity, 1.0, value, Utc::now()).with_ticker(ticker)
    }

    #[test]
    fn test_holding_count_steps() {
        assert_eq!(holding_count_score(0), 0.0);
        assert_eq!(holding_count_score(1), 20.0);
        assert_eq!(holding_count_score(2), 20.0);
        assert_eq!(holding_count_score(3), 40.0);
        assert_eq!(holding_count_score(4), 40.0);
        assert_eq!(holding_count_score(5), 60.0);
        assert_eq!(holding_count_score(7), 60.0);
        assert_eq!(holding_count_score(8), 100.0);
        assert_eq!(holding_count_score(20), 100.0);
    }

    #[test]
    fn test_holding_count_over_diversified() {
        assert_eq!(holding_count_score(21), 98.0);
        assert_eq!(holding_count_score(25), 90.0);
        assert_eq!(holding_count_score(30), 80.0);
        assert_eq!(holding_count_score(200), 80.0);
    }

    #[test]
    fn test_sector_and_class_steps() {
        let sector: Vec<f64> = (0..=6).map(sector_diversity_score).collect();
        assert_eq!(sector, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 100.0]);

        let class: Vec<f64> = (0..=5).map(asset_class_diversity_score).collect();
        assert_eq!(class, vec![0.0, 30.0, 60.0, 80.0, 100.0, 100.0]);
    }

    #[test]
    fn test_concentration_thresholds() {
        assert_eq!(concentration_score(100.0), 0.0);
        assert_eq!(concentration_score(50.1), 0.0);
        assert_eq!(concentration_score(50.0), 30.0);
        assert_eq!(concentration_score(40.0), 60.0);
        assert_eq!(concentration_score(30.0), 80.0);
        assert_eq!(concentration_score(20.0), 100.0);
        assert_eq!(concentration_score(5.0), 100.0);
    }

    #[test]
    fn test_single_holding_fully_concentrated() {
        let holdings = vec![stock("AAPL", 100.0)];
        let totals = PortfolioTotals::from_holdings(&holdings);
        let score = score_diversification(&holdings, &totals);

        assert_eq!(score.max_concentration_pct, 100.0);
        assert_eq!(score.concentration_score, 0.0);
        assert_eq!(score.sectors, vec!["Technology".to_string()]);
        assert_eq!(score.score, 7);
    }

    #[test]
    fn test_sectors_are_distinct_and_sorted() {
        let holdings = vec![
            stock("YPF", 10.0),
            stock("AAPL", 10.0),
            stock("MSFT", 10.0),
            stock("GGAL", 10.0),
        ];
        let totals = PortfolioTotals::from_holdings(&holdings);
        let score = score_diversification(&holdings, &totals);

        assert_eq!(score.sector_count, 3);
        assert_eq!(score.sectors, vec!["Energy", "Financials", "Technology"]);
        assert_eq!(score.asset_class_count, 1);
        assert_eq!(score.max_concentration_pct, 25.0);
        assert_eq!(score.concentration_score, 80.0);
    }

    #[test]
    fn test_zero_value_portfolio_has_zero_concentration_score() {
        let holdings = vec![stock("AAPL", 10.0).with_current_price(0.0)];
        let totals = PortfolioTotals::from_holdings(&holdings);
        let score = score_diversification(&holdings, &totals);

        assert_eq!(score.max_concentration_pct, 0.0);
        assert_eq!(score.concentration_score, 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let score = score_diversification(&[], &PortfolioTotals::default());
        assert_eq!(score, DiversificationScore::default());
    }
}
