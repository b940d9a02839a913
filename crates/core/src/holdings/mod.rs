//! Holdings module - portfolio positions as supplied by the application.

mod holdings_model;

#[cfg(test)]
mod holdings_model_tests;

pub use holdings_model::{AssetClass, Holding};
