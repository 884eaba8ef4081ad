use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, Questionnaire};
use crate::responses::ResponseSet;
use crate::scoring::{ExpectedItem, YES_NO};
use crate::validation::ValidationError;
use crate::Instrument;

/// C-SSRS: Columbia-Suicide Severity Rating Scale, screener version.
/// Six yes/no items. Risk is the most severe level any "yes" reaches.
pub struct Cssrs;

pub const SCHEMA: &[ExpectedItem] = &[
    ExpectedItem::new("cssrs_q1", YES_NO),
    ExpectedItem::new("cssrs_q2", YES_NO),
    ExpectedItem::new("cssrs_q3", YES_NO),
    ExpectedItem::new("cssrs_q4", YES_NO),
    ExpectedItem::new("cssrs_q5", YES_NO),
    ExpectedItem::new("cssrs_q6", YES_NO),
];

const YES: u32 = 1;

/// Ordered most severe first; the first rule with an endorsed item wins.
const RISK_RULES: &[(&[&str], RiskLevel)] = &[
    (&["cssrs_q6"], RiskLevel::High),
    (&["cssrs_q4", "cssrs_q5"], RiskLevel::Moderate),
    (&["cssrs_q1", "cssrs_q2", "cssrs_q3"], RiskLevel::Low),
];

impl Instrument for Cssrs {
    fn id(&self) -> &str {
        "cssrs"
    }

    fn name(&self) -> &str {
        "C-SSRS"
    }

    fn questionnaire(&self) -> &Questionnaire {
        static QUESTIONNAIRE: std::sync::LazyLock<Questionnaire> =
            std::sync::LazyLock::new(|| {
                let items = [
                    "Have you wished you were dead or wished you could go to sleep and not wake up?",
                    "Have you actually had any thoughts of killing yourself?",
                    "Have you been thinking about how you might kill yourself?",
                    "Have you had these thoughts and had some intention of acting on them?",
                    "Have you started to work out or worked out the details of how to kill yourself? Do you intend to carry out this plan?",
                    "Have you ever done anything, started to do anything, or prepared to do anything to end your life?",
                ];

                let mut questions: Vec<_> = items
                    .iter()
                    .enumerate()
                    .map(|(i, text)| {
                        catalog::question(
                            &format!("cssrs_q{}", i + 1),
                            text,
                            catalog::yes_no_options(),
                        )
                    })
                    .collect();
                if let Some(behavior) = questions.last_mut() {
                    behavior.note = Some(
                        "If yes, ask about the most recent behavior and whether it occurred within the past 3 months."
                            .to_string(),
                    );
                }

                Questionnaire {
                    id: "cssrs".to_string(),
                    title: "Columbia-Suicide Severity Rating Scale (C-SSRS) Screener".to_string(),
                    description: "Ask the client to respond Yes or No to each question based on the last month unless otherwise specified.".to_string(),
                    questions,
                }
            });
        &QUESTIONNAIRE
    }

    fn schema(&self) -> &'static [ExpectedItem] {
        SCHEMA
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    NoRisk,
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::NoRisk => "No indicated suicidal ideation",
            RiskLevel::Low => "Suicidal ideation present",
            RiskLevel::Moderate => "Suicidal ideation with intent or plan",
            RiskLevel::High => "Suicidal behavior present",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::NoRisk => "No items on the C-SSRS screener were endorsed.",
            RiskLevel::Low => {
                "Client endorsed wish to be dead or suicidal thoughts without plan or intent."
            }
            RiskLevel::Moderate => {
                "Client endorsed suicidal thoughts with intent or specific planning."
            }
            RiskLevel::High => "Client endorsed a suicidal behavior or attempt.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CssrsResult {
    pub risk_level: RiskLevel,
    pub label: String,
    pub description: String,
}

pub fn evaluate(responses: &ResponseSet) -> Result<CssrsResult, ValidationError> {
    let answers = Cssrs.validate(responses)?;
    let endorsed: Vec<&str> = answers.answered_with(YES).collect();

    let risk_level = RISK_RULES
        .iter()
        .find(|(items, _)| items.iter().any(|item| endorsed.contains(item)))
        .map_or(RiskLevel::NoRisk, |(_, level)| *level);

    Ok(CssrsResult {
        risk_level,
        label: risk_level.label().to_string(),
        description: risk_level.description().to_string(),
    })
}
