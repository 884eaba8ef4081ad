use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, Questionnaire};
use crate::responses::ResponseSet;
use crate::scoring::{self, Band, ExpectedItem, LIKERT, ScoreRange, Severity};
use crate::validation::ValidationError;
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder 7-item scale. Each item 0–3, total 0–21.
pub struct Gad7;

pub const SCHEMA: &[ExpectedItem] = &[
    ExpectedItem::new("gad7_q1", LIKERT),
    ExpectedItem::new("gad7_q2", LIKERT),
    ExpectedItem::new("gad7_q3", LIKERT),
    ExpectedItem::new("gad7_q4", LIKERT),
    ExpectedItem::new("gad7_q5", LIKERT),
    ExpectedItem::new("gad7_q6", LIKERT),
    ExpectedItem::new("gad7_q7", LIKERT),
];

pub const TOTAL_RANGE: ScoreRange = ScoreRange::new(0, 21);

pub const SEVERITY: &[Band<Severity>] = &[
    Band::new(0, 4, Severity::Minimal),
    Band::new(5, 9, Severity::Mild),
    Band::new(10, 14, Severity::Moderate),
    Band::new(15, 21, Severity::Severe),
];

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn questionnaire(&self) -> &Questionnaire {
        static QUESTIONNAIRE: std::sync::LazyLock<Questionnaire> =
            std::sync::LazyLock::new(|| Questionnaire {
                id: "gad7".to_string(),
                title: "Generalized Anxiety Disorder 7-item (GAD-7)".to_string(),
                description: catalog::TWO_WEEK_PROMPT.to_string(),
                questions: catalog::likert_questions(
                    "gad7",
                    &[
                        "Feeling nervous, anxious, or on edge",
                        "Not being able to stop or control worrying",
                        "Worrying too much about different things",
                        "Trouble relaxing",
                        "Being so restless that it's hard to sit still",
                        "Becoming easily annoyed or irritable",
                        "Feeling afraid, as if something awful might happen",
                    ],
                ),
            });
        &QUESTIONNAIRE
    }

    fn schema(&self) -> &'static [ExpectedItem] {
        SCHEMA
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gad7Result {
    pub total_score: u32,
    pub severity: Severity,
}

pub fn score(responses: &ResponseSet) -> Result<Gad7Result, ValidationError> {
    let total_score = Gad7.validate(responses)?.total();
    Ok(Gad7Result {
        total_score,
        severity: severity(total_score),
    })
}

pub fn severity(total: u32) -> Severity {
    scoring::severity(SEVERITY, total)
}
