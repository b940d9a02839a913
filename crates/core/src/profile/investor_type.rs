//! Investor-type classification from questionnaire answers.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::risk_profile_model::{RiskProfile, RiskTolerance};
use crate::errors::{Result, ValidationError};

/// Lowest score an answer can carry (most cautious option)
const MIN_ANSWER_SCORE: u8 = 1;
/// Highest score an answer can carry (most risk-seeking option)
const MAX_ANSWER_SCORE: u8 = 5;

/// Normalized scores below this are conservative
const CONSERVATIVE_BELOW: f64 = 35.0;
/// Normalized scores below this (and not conservative) are moderate
const MODERATE_BELOW: f64 = 65.0;

/// A single scored answer from the profile questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswer {
    pub question_id: String,
    /// 1 (most cautious) to 5 (most risk-seeking)
    pub score: u8,
}

impl QuestionnaireAnswer {
    pub fn new(question_id: impl Into<String>, score: u8) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

/// Outcome of the investor questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    pub risk_tolerance: RiskTolerance,
    /// Answer scores rescaled to 0-100
    pub normalized_score: f64,
    pub answered_questions: usize,
    #[serde(default)]
    pub has_emergency_fund: Option<bool>,
}

impl InvestorProfile {
    /// The risk profile consumed by the health score engine.
    pub fn risk_profile(&self) -> RiskProfile {
        RiskProfile {
            risk_tolerance: Some(self.risk_tolerance),
            has_emergency_fund: self.has_emergency_fund,
        }
    }
}

/// Classifies an investor as conservative, moderate or aggressive.
///
/// Scores are rescaled so that all-minimum answers map to 0 and
/// all-maximum answers map to 100 regardless of questionnaire length.
pub fn classify_investor(
    answers: &[QuestionnaireAnswer],
    has_emergency_fund: Option<bool>,
) -> Result<InvestorProfile> {
    if answers.is_empty() {
        return Err(ValidationError::MissingField("answers".to_string()).into());
    }

    let mut seen = HashSet::new();
    for answer in answers {
        if !seen.insert(answer.question_id.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "question '{}' answered more than once",
                answer.question_id
            ))
            .into());
        }
        if !(MIN_ANSWER_SCORE..=MAX_ANSWER_SCORE).contains(&answer.score) {
            return Err(ValidationError::out_of_range(
                format!("answers.{}", answer.question_id),
                format!(
                    "score {} outside {}..={}",
                    answer.score, MIN_ANSWER_SCORE, MAX_ANSWER_SCORE
                ),
            )
            .into());
        }
    }

    let count = answers.len() as f64;
    let sum: f64 = answers.iter().map(|a| f64::from(a.score)).sum();
    let span = f64::from(MAX_ANSWER_SCORE - MIN_ANSWER_SCORE) * count;
    let normalized_score = (sum - f64::from(MIN_ANSWER_SCORE) * count) / span * 100.0;

    let risk_tolerance = if normalized_score < CONSERVATIVE_BELOW {
        RiskTolerance::Conservative
    } else if normalized_score < MODERATE_BELOW {
        RiskTolerance::Moderate
    } else {
        RiskTolerance::Aggressive
    };

    debug!(
        "Classified investor from {} answers: score {:.1} -> {}",
        answers.len(),
        normalized_score,
        risk_tolerance
    );

    Ok(InvestorProfile {
        risk_tolerance,
        normalized_score,
        answered_questions: answers.len(),
        has_emergency_fund,
    })
}
