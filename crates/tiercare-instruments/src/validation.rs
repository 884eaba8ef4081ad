use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;

use crate::responses::ResponseSet;
use crate::scoring::{ExpectedItem, ScoreRange};

/// The single precondition failure of the scoring engine. Always caused by
/// caller input; the message is meant to be shown to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("No responses were provided.")]
    Empty,

    #[error("Response for {question_id} must be an integer.")]
    NonInteger { question_id: String },

    #[error("Response for {question_id} must be within {min}-{max}.")]
    OutOfRange {
        question_id: String,
        min: u32,
        max: u32,
    },

    #[error("Missing responses for: {}.", .question_ids.join(", "))]
    Missing { question_ids: Vec<String> },

    #[error("At least one of PHQ-9 or GAD-7 scores must be provided.")]
    MissingScores,
}

impl ValidationError {
    pub fn out_of_range(question_id: &str, range: ScoreRange) -> Self {
        ValidationError::OutOfRange {
            question_id: question_id.to_string(),
            min: range.min,
            max: range.max,
        }
    }
}

/// Schema-covered answers that passed validation, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers(Vec<(&'static str, u32)>);

impl Answers {
    /// The answer for `question_id`; ids outside the schema read as 0.
    pub fn value(&self, question_id: &str) -> u32 {
        self.0
            .iter()
            .find(|(id, _)| *id == question_id)
            .map_or(0, |(_, v)| *v)
    }

    /// Sum of the answers for the given ids.
    pub fn sum_of(&self, question_ids: &[&str]) -> u32 {
        question_ids.iter().map(|id| self.value(id)).sum()
    }

    /// Sum of every schema-covered answer.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, v)| v).sum()
    }

    /// Ids answered with `value`, in input order.
    pub fn answered_with(&self, value: u32) -> impl Iterator<Item = &'static str> + '_ {
        self.0
            .iter()
            .filter(move |(_, v)| *v == value)
            .map(|(id, _)| *id)
    }
}

/// Check a response set against an expected schema.
///
/// Supplied answers are checked for type and range in input order, so the
/// first offending id is reported. Missing ids are reported afterwards, all
/// at once and sorted. Ids outside the schema are ignored.
pub fn validate(
    responses: &ResponseSet,
    schema: &'static [ExpectedItem],
) -> Result<Answers, ValidationError> {
    if responses.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut answers = Vec::with_capacity(schema.len());
    for (question_id, value) in responses.iter() {
        let value = integer(value).ok_or_else(|| ValidationError::NonInteger {
            question_id: question_id.to_string(),
        })?;

        if let Some(item) = schema.iter().find(|item| item.id == question_id) {
            let answer = u32::try_from(value)
                .ok()
                .filter(|v| item.range.contains(*v))
                .ok_or_else(|| ValidationError::out_of_range(question_id, item.range))?;
            answers.push((item.id, answer));
        }
    }

    let mut missing: Vec<String> = schema
        .iter()
        .filter(|item| !responses.contains(item.id))
        .map(|item| item.id.to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(ValidationError::Missing {
            question_ids: missing,
        });
    }

    Ok(Answers(answers))
}

/// Check a pre-aggregated score against its valid range.
pub fn check_score(field: &str, value: u32, range: ScoreRange) -> Result<u32, ValidationError> {
    if range.contains(value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(field, range))
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        // Integers too large for i64 are still integers, just out of range.
        Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
        _ => None,
    }
}
