//! Questionnaire text and answer options, for presentation only. Scoring
//! never reads from here; it works off each instrument's schema.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    /// Extra guidance for the administering clinician.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// Instructions shared by the PHQ and GAD forms.
pub(crate) const TWO_WEEK_PROMPT: &str =
    "Over the last 2 weeks, how often have you been bothered by the following problems?";

pub(crate) fn likert_options() -> Vec<AnswerOption> {
    [
        (0, "Not at all"),
        (1, "Several days"),
        (2, "More than half the days"),
        (3, "Nearly every day"),
    ]
    .into_iter()
    .map(|(value, label)| option(value, label))
    .collect()
}

pub(crate) fn yes_no_options() -> Vec<AnswerOption> {
    vec![option(1, "Yes"), option(0, "No")]
}

/// Build Likert questions numbered `{prefix}_q1`, `{prefix}_q2`, ...
pub(crate) fn likert_questions(prefix: &str, texts: &[&str]) -> Vec<Question> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| question(&format!("{prefix}_q{}", i + 1), text, likert_options()))
        .collect()
}

pub(crate) fn question(id: &str, text: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options,
        note: None,
    }
}

fn option(value: u32, label: &str) -> AnswerOption {
    AnswerOption {
        value,
        label: label.to_string(),
    }
}
