use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, Questionnaire};
use crate::responses::ResponseSet;
use crate::scoring::{ExpectedItem, LIKERT, ScoreRange};
use crate::validation::ValidationError;
use crate::Instrument;

/// PHQ-4: Patient Health Questionnaire-4.
/// Two PHQ-2 depression items followed by two GAD-2 anxiety items, each
/// 0–3. Subscores 0–6, total 0–12.
pub struct Phq4;

pub const SCHEMA: &[ExpectedItem] = &[
    ExpectedItem::new("phq4_q1", LIKERT),
    ExpectedItem::new("phq4_q2", LIKERT),
    ExpectedItem::new("phq4_q3", LIKERT),
    ExpectedItem::new("phq4_q4", LIKERT),
];

const DEPRESSION_ITEMS: &[&str] = &["phq4_q1", "phq4_q2"];
const ANXIETY_ITEMS: &[&str] = &["phq4_q3", "phq4_q4"];

/// Valid range of either subscore.
pub const SUBSCORE_RANGE: ScoreRange = ScoreRange::new(0, 6);

/// A subscore at or above this warrants the full follow-up instrument.
pub const FOLLOW_UP_THRESHOLD: u32 = 3;

const MONITOR_MESSAGE: &str =
    "Monitor symptoms and consider psychoeducation. No additional screening is required at this time.";
const BOTH_MESSAGE: &str = "Administer both the PHQ-9 and the GAD-7 for a fuller assessment.";
const PHQ9_MESSAGE: &str = "Administer the PHQ-9 to further evaluate depressive symptoms.";
const GAD7_MESSAGE: &str = "Administer the GAD-7 to further evaluate anxiety symptoms.";

impl Instrument for Phq4 {
    fn id(&self) -> &str {
        "phq4"
    }

    fn name(&self) -> &str {
        "PHQ-4"
    }

    fn questionnaire(&self) -> &Questionnaire {
        static QUESTIONNAIRE: std::sync::LazyLock<Questionnaire> =
            std::sync::LazyLock::new(|| Questionnaire {
                id: "phq4".to_string(),
                title: "Patient Health Questionnaire-4 (PHQ-4)".to_string(),
                description: catalog::TWO_WEEK_PROMPT.to_string(),
                questions: catalog::likert_questions(
                    "phq4",
                    &[
                        "Little interest or pleasure in doing things",
                        "Feeling down, depressed, or hopeless",
                        "Feeling nervous, anxious, or on edge",
                        "Not being able to stop or control worrying",
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
pub struct Phq4Scores {
    pub total_score: u32,
    pub depression_score: u32,
    pub anxiety_score: u32,
}

/// Which full-length instruments should follow a PHQ-4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FollowUp {
    pub recommend_phq9: bool,
    pub recommend_gad7: bool,
    pub message: String,
}

/// PHQ-4 scores together with their follow-up recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq4Assessment {
    #[serde(flatten)]
    pub scores: Phq4Scores,
    #[serde(flatten)]
    pub follow_up: FollowUp,
}

pub fn score(responses: &ResponseSet) -> Result<Phq4Scores, ValidationError> {
    let answers = Phq4.validate(responses)?;

    let depression_score = answers.sum_of(DEPRESSION_ITEMS);
    let anxiety_score = answers.sum_of(ANXIETY_ITEMS);

    Ok(Phq4Scores {
        total_score: depression_score + anxiety_score,
        depression_score,
        anxiety_score,
    })
}

/// Derive the next screening step from the two PHQ-4 subscores.
pub fn follow_up(depression_score: u32, anxiety_score: u32) -> FollowUp {
    let recommend_phq9 = depression_score >= FOLLOW_UP_THRESHOLD;
    let recommend_gad7 = anxiety_score >= FOLLOW_UP_THRESHOLD;

    let message = match (recommend_phq9, recommend_gad7) {
        (false, false) => MONITOR_MESSAGE,
        (true, true) => BOTH_MESSAGE,
        (true, false) => PHQ9_MESSAGE,
        (false, true) => GAD7_MESSAGE,
    };

    FollowUp {
        recommend_phq9,
        recommend_gad7,
        message: message.to_string(),
    }
}

/// Score a PHQ-4 and attach the follow-up recommendation.
pub fn assess(responses: &ResponseSet) -> Result<Phq4Assessment, ValidationError> {
    let scores = score(responses)?;
    let follow_up = follow_up(scores.depression_score, scores.anxiety_score);
    Ok(Phq4Assessment { scores, follow_up })
}
