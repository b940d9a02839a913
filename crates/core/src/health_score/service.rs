//! Health score service implementation.
//!
//! The HealthScoreService validates caller-supplied holdings, logs the
//! evaluation and delegates to the pure engine.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::engine::compute_health_score_with_config;
use super::model::{HealthScoreConfig, HealthScoreResult};
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::Holding;
use crate::profile::RiskProfile;

/// Service for scoring portfolios with a fixed, validated configuration.
#[derive(Debug, Clone, Default)]
pub struct HealthScoreService {
    config: HealthScoreConfig,
}

impl HealthScoreService {
    /// Creates a service with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with custom configuration.
    pub fn with_config(config: HealthScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HealthScoreConfig {
        &self.config
    }

    /// Validates the holdings and scores them as of now.
    pub fn evaluate(
        &self,
        holdings: &[Holding],
        risk_profile: Option<&RiskProfile>,
    ) -> Result<HealthScoreResult> {
        self.evaluate_at(holdings, risk_profile, Utc::now())
    }

    /// Validates the holdings and scores them as of `now`.
    pub fn evaluate_at(
        &self,
        holdings: &[Holding],
        risk_profile: Option<&RiskProfile>,
        now: DateTime<Utc>,
    ) -> Result<HealthScoreResult> {
        for (index, holding) in holdings.iter().enumerate() {
            if let Err(err) = holding.validate() {
                warn!(
                    "Rejecting health score request: holding #{} ({}) is invalid: {}",
                    index,
                    holding.ticker.as_deref().unwrap_or(holding.asset_class.as_str()),
                    err
                );
                return Err(match err {
                    Error::Validation(ValidationError::OutOfRange { field, message }) => {
                        ValidationError::out_of_range(format!("holdings[{}].{}", index, field), message)
                            .into()
                    }
                    Error::Validation(ValidationError::InvalidInput(message)) => {
                        ValidationError::InvalidInput(format!("holdings[{}]: {}", index, message))
                            .into()
                    }
                    other => other,
                });
            }
        }

        info!(
            "Computing portfolio health score for {} holdings as of {} (risk profile: {})",
            holdings.len(),
            now.to_rfc3339(),
            risk_profile
                .and_then(|p| p.risk_tolerance)
                .map(|t| t.as_str())
                .unwrap_or("none")
        );

        let result = compute_health_score_with_config(holdings, risk_profile, &self.config, now);

        let breakdown = &result.breakdown;
        debug!(
            "Health score sub-scores: diversification={} risk={} performance={} best_practices={}",
            breakdown.diversification.score,
            breakdown.risk_management.score,
            breakdown.performance.score,
            breakdown.best_practices.score
        );
        info!(
            "Portfolio health score: {} ({}), {} recommendations",
            result.total_score,
            result.rating,
            result.recommendations.len()
        );

        Ok(result)
    }
}
