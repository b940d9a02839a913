//! Finanwas Core - Portfolio health scoring and financial calculators.
//!
//! This crate contains the pure computational core of Finanwas. It performs
//! no I/O: holdings and profiles are supplied by the application, which is
//! also responsible for persisting or rendering the results.

pub mod calculators;
pub mod constants;
pub mod errors;
pub mod health_score;
pub mod holdings;
pub mod profile;

// Re-export the types most callers need
pub use health_score::{
    compute_health_score, compute_health_score_at, HealthRating, HealthScoreResult,
    HealthScoreService,
};
pub use holdings::{AssetClass, Holding};
pub use profile::{RiskProfile, RiskTolerance};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
