use axum::Json;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use tiercare_instruments::instruments::cssrs::{self, CssrsResult};
use tiercare_instruments::instruments::gad7::{self, Gad7Result};
use tiercare_instruments::instruments::phq4::{self, Phq4Assessment};
use tiercare_instruments::instruments::phq9::{self, Phq9Result};
use tiercare_instruments::responses::ResponseSet;
use tiercare_instruments::summary::{self, Summary, SummaryRequest};
use tiercare_instruments::tier::{self, TierResult};

use crate::error::ApiError;

/// Item-level keys the summary form may post at the top level.
const SUMMARY_ITEM_PREFIXES: &[&str] = &["phq9_q", "gad7_q"];

#[derive(Deserialize)]
pub struct QuestionnaireRequest {
    pub responses: ResponseSet,
}

#[derive(Deserialize)]
pub struct TierRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phq9_total: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gad7_total: Option<u32>,
}

/// Payload of the summary form. Besides the named fields, the form may post
/// PHQ-9 and GAD-7 answers as top-level `phq9_q*` / `gad7_q*` keys.
#[derive(Deserialize)]
pub struct SummaryBody {
    #[serde(deserialize_with = "loose_score")]
    pub phq4_depression: u32,
    #[serde(deserialize_with = "loose_score")]
    pub phq4_anxiety: u32,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phq9_total: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gad7_total: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub rating: Option<u32>,
    #[serde(default)]
    pub responses: Option<ResponseSet>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl From<SummaryBody> for SummaryRequest {
    fn from(body: SummaryBody) -> Self {
        let responses = body.responses.unwrap_or_else(|| {
            body.rest
                .into_iter()
                .filter(|(k, _)| SUMMARY_ITEM_PREFIXES.iter().any(|p| k.starts_with(p)))
                .map(|(k, v)| (k, form_integer(v)))
                .collect::<Map<_, _>>()
                .into()
        });

        SummaryRequest {
            phq4_depression: body.phq4_depression,
            phq4_anxiety: body.phq4_anxiety,
            phq9_total: body.phq9_total,
            gad7_total: body.gad7_total,
            rating: body.rating,
            responses,
        }
    }
}

/// Score the PHQ-4 and determine next steps.
pub async fn assess_phq4(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<Phq4Assessment>, ApiError> {
    Ok(Json(phq4::assess(&req.responses)?))
}

pub async fn assess_phq9(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<Phq9Result>, ApiError> {
    Ok(Json(phq9::score(&req.responses)?))
}

pub async fn assess_gad7(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<Gad7Result>, ApiError> {
    Ok(Json(gad7::score(&req.responses)?))
}

/// Evaluate risk level based on the C-SSRS screener.
pub async fn assess_cssrs(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<CssrsResult>, ApiError> {
    let result = cssrs::evaluate(&req.responses)?;
    if result.risk_level >= cssrs::RiskLevel::Moderate {
        tracing::warn!(risk_level = ?result.risk_level, "elevated C-SSRS risk");
    }
    Ok(Json(result))
}

/// Combine PHQ-9 and GAD-7 totals into a service tier recommendation.
pub async fn determine_tier(Json(req): Json<TierRequest>) -> Result<Json<TierResult>, ApiError> {
    Ok(Json(tier::determine_tier(req.phq9_total, req.gad7_total)?))
}

pub async fn summarize(Json(body): Json<SummaryBody>) -> Result<Json<Summary>, ApiError> {
    Ok(Json(summary::summarize(&body.into())?))
}

/// Turn a numeric form string into a JSON integer. Anything else is passed
/// through unchanged so the validator can report it by question id.
fn form_integer(value: Value) -> Value {
    let parsed = value.as_str().and_then(|s| s.trim().parse::<i64>().ok());
    parsed.map_or(value, Value::from)
}

/// A score posted by an HTML form: a JSON integer or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScore {
    Number(u32),
    Text(String),
}

fn loose_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    blank_as_none(deserializer)?.ok_or_else(|| D::Error::custom("a score is required"))
}

/// Accept an integer, a numeric string, `null`, or `""` (treated as absent).
fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    match Option::<LooseScore>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseScore::Number(v)) => Ok(Some(v)),
        Some(LooseScore::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(LooseScore::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got '{s}'"))),
    }
}
