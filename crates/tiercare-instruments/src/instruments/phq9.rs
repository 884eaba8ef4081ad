use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, Questionnaire};
use crate::responses::ResponseSet;
use crate::scoring::{self, Band, ExpectedItem, LIKERT, ScoreRange, Severity};
use crate::validation::ValidationError;
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire-9.
/// Nine depression items, each 0–3. Total 0–27. Item 9 screens for
/// thoughts of self-harm and is reported on its own.
pub struct Phq9;

pub const SCHEMA: &[ExpectedItem] = &[
    ExpectedItem::new("phq9_q1", LIKERT),
    ExpectedItem::new("phq9_q2", LIKERT),
    ExpectedItem::new("phq9_q3", LIKERT),
    ExpectedItem::new("phq9_q4", LIKERT),
    ExpectedItem::new("phq9_q5", LIKERT),
    ExpectedItem::new("phq9_q6", LIKERT),
    ExpectedItem::new("phq9_q7", LIKERT),
    ExpectedItem::new("phq9_q8", LIKERT),
    ExpectedItem::new("phq9_q9", LIKERT),
];

const SELF_HARM_ITEM: &str = "phq9_q9";

pub const TOTAL_RANGE: ScoreRange = ScoreRange::new(0, 27);

pub const SEVERITY: &[Band<Severity>] = &[
    Band::new(0, 4, Severity::Minimal),
    Band::new(5, 9, Severity::Mild),
    Band::new(10, 14, Severity::Moderate),
    Band::new(15, 19, Severity::ModeratelySevere),
    Band::new(20, 27, Severity::Severe),
];

/// Totals at or above this trigger the C-SSRS regardless of item 9.
pub const CSSRS_TOTAL_THRESHOLD: u32 = 10;

pub const CSSRS_RECOMMENDED_MESSAGE: &str =
    "Administer the C-SSRS screener because item 9 was positive or the total score indicates elevated risk.";
const CSSRS_NOT_REQUIRED_MESSAGE: &str =
    "C-SSRS screener is not required based on current PHQ-9 responses.";

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn questionnaire(&self) -> &Questionnaire {
        static QUESTIONNAIRE: std::sync::LazyLock<Questionnaire> =
            std::sync::LazyLock::new(|| Questionnaire {
                id: "phq9".to_string(),
                title: "Patient Health Questionnaire-9 (PHQ-9)".to_string(),
                description: catalog::TWO_WEEK_PROMPT.to_string(),
                questions: catalog::likert_questions(
                    "phq9",
                    &[
                        "Little interest or pleasure in doing things",
                        "Feeling down, depressed, or hopeless",
                        "Trouble falling or staying asleep, or sleeping too much",
                        "Feeling tired or having little energy",
                        "Poor appetite or overeating",
                        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                        "Trouble concentrating on things, such as reading the newspaper or watching television",
                        "Moving or speaking so slowly that other people could have noticed? Or the opposite, being so fidgety or restless that you have been moving around a lot more than usual",
                        "Thoughts that you would be better off dead or of hurting yourself in some way",
                    ],
                ),
            });
        &QUESTIONNAIRE
    }

    fn schema(&self) -> &'static [ExpectedItem] {
        SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Result {
    pub total_score: u32,
    pub item_9_score: u32,
    pub severity: Severity,
    pub recommend_cssrs: bool,
    pub message: String,
}

pub fn score(responses: &ResponseSet) -> Result<Phq9Result, ValidationError> {
    let answers = Phq9.validate(responses)?;

    let total_score = answers.total();
    let item_9_score = answers.value(SELF_HARM_ITEM);
    let recommend_cssrs = recommends_cssrs(item_9_score, total_score);

    let message = if recommend_cssrs {
        CSSRS_RECOMMENDED_MESSAGE
    } else {
        CSSRS_NOT_REQUIRED_MESSAGE
    };

    Ok(Phq9Result {
        total_score,
        item_9_score,
        severity: severity(total_score),
        recommend_cssrs,
        message: message.to_string(),
    })
}

pub fn severity(total: u32) -> Severity {
    scoring::severity(SEVERITY, total)
}

/// Any endorsement of item 9, or an elevated total on its own, calls for
/// the C-SSRS.
pub fn recommends_cssrs(item_9_score: u32, total: u32) -> bool {
    item_9_score > 0 || total >= CSSRS_TOTAL_THRESHOLD
}
