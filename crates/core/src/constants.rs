/// Weight of the diversification sub-score in the total (points out of 100)
pub const DIVERSIFICATION_WEIGHT: f64 = 0.35;

/// Weight of the risk management sub-score in the total
pub const RISK_MANAGEMENT_WEIGHT: f64 = 0.30;

/// Weight of the performance sub-score in the total
pub const PERFORMANCE_WEIGHT: f64 = 0.20;

/// Weight of the best practices sub-score in the total
pub const BEST_PRACTICES_WEIGHT: f64 = 0.15;

/// Holdings above this count start losing holding-count points
pub const MAX_MANAGEABLE_HOLDINGS: usize = 20;

/// Points lost per holding above `MAX_MANAGEABLE_HOLDINGS`
pub const OVER_DIVERSIFICATION_PENALTY: f64 = 2.0;

/// Floor of the holding-count score once over-diversified
pub const OVER_DIVERSIFICATION_FLOOR: f64 = 80.0;

/// Points per unit of average volatility subtracted from the volatility score
pub const VOLATILITY_PENALTY_PER_UNIT: f64 = 20.0;

/// Alignment points lost per unit of volatility below the expected range
pub const UNDER_RISK_PENALTY_PER_UNIT: f64 = 20.0;

/// Alignment points lost per unit of volatility above the expected range
pub const OVER_RISK_PENALTY_PER_UNIT: f64 = 40.0;

/// Alignment score floor when the portfolio is more cautious than the profile
pub const UNDER_RISK_FLOOR: f64 = 60.0;

/// Alignment score floor when the portfolio is riskier than the profile
pub const OVER_RISK_FLOOR: f64 = 30.0;

/// Alignment score used when the user has not stated a risk tolerance
pub const NEUTRAL_ALIGNMENT_SCORE: f64 = 50.0;

/// Default trailing window (days) for the recent-activity check
pub const RECENT_ACTIVITY_DAYS: u32 = 30;

/// Default and maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Concentration (percent) above which rebalancing is flagged
pub const REBALANCE_WARNING_PCT: f64 = 30.0;

/// Concentration (percent) above which rebalancing is urgent
pub const REBALANCE_CRITICAL_PCT: f64 = 40.0;

/// Decimal places kept in calculator output
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
