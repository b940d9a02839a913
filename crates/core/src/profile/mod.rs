//! Investor profile module - stated risk tolerance and the questionnaire
//! classification that produces it.

mod investor_type;
mod risk_profile_model;

pub use investor_type::{classify_investor, InvestorProfile, QuestionnaireAnswer};
pub use risk_profile_model::{RiskProfile, RiskTolerance};
