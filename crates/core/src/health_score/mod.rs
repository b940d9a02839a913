//! Portfolio Health Score module.
//!
//! Scores a portfolio from 0 to 100 across four weighted areas and turns
//! the weak spots into a short list of recommendations.
//!
//! # Architecture
//!
//! ```text
//! HealthScoreService (validation, logging)
//!         ↓
//! compute_health_score_* (engine.rs)
//!         ↓
//! PortfolioTotals → [Sub-scores] → ScoreBreakdown → Rating + Recommendations
//! ```
//!
//! - **Models** (`model.rs`) - Result, breakdown, rating and config types
//! - **Sectors** (`sectors.rs`) - Static ticker and asset class sector tables
//! - **Scores** (`scores/`) - The four sub-score calculations
//! - **Recommendations** (`recommendations.rs`) - Ordered advice checklist
//! - **Service** (`service.rs`) - Validated entry point
//!
//! # Weights
//!
//! | Area            | Points |
//! |-----------------|--------|
//! | Diversification | 35     |
//! | Risk management | 30     |
//! | Performance     | 20     |
//! | Best practices  | 15     |

pub mod engine;
pub mod model;
pub mod recommendations;
pub mod scores;
pub mod sectors;
pub mod service;


pub use engine::{compute_health_score, compute_health_score_at, compute_health_score_with_config};
pub use model::{
    BestPracticesScore, DiversificationScore, HealthRating, HealthScoreConfig, HealthScoreResult,
    PerformanceScore, RiskScore, ScoreBreakdown, ScoreColor,
};
pub use scores::PortfolioTotals;
pub use service::HealthScoreService;
