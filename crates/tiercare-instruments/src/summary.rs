//! One-page screening summary combining PHQ-4 subscores with whatever
//! PHQ-9 and GAD-7 information is available.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::{gad7, phq4, phq9};
use crate::responses::ResponseSet;
use crate::scoring::{ScoreRange, Severity};
use crate::tier;
use crate::validation::{ValidationError, check_score};

pub const RATING_RANGE: ScoreRange = ScoreRange::new(1, 5);

const TIER_NOT_DETERMINED: &str =
    "Not determined. Provide a PHQ-9 or GAD-7 score to assign a service tier.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub phq4_depression: u32,
    pub phq4_anxiety: u32,
    #[serde(default)]
    pub phq9_total: Option<u32>,
    #[serde(default)]
    pub gad7_total: Option<u32>,
    /// Client's 1–5 rating of the screening experience.
    #[serde(default)]
    pub rating: Option<u32>,
    /// Item-level answers used when a total was not supplied.
    #[serde(default)]
    pub responses: ResponseSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Summary {
    pub screening_summary: String,
    pub recommended_actions: String,
    pub service_tier: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub feedback: Option<String>,
}

struct Phq9Outcome {
    total: u32,
    severity: Severity,
    recommend_cssrs: bool,
}

struct Gad7Outcome {
    total: u32,
    severity: Severity,
}

pub fn summarize(request: &SummaryRequest) -> Result<Summary, ValidationError> {
    let depression = check_score("phq4_depression", request.phq4_depression, phq4::SUBSCORE_RANGE)?;
    let anxiety = check_score("phq4_anxiety", request.phq4_anxiety, phq4::SUBSCORE_RANGE)?;
    let rating = request
        .rating
        .map(|r| check_score("rating", r, RATING_RANGE))
        .transpose()?;

    let follow_up = phq4::follow_up(depression, anxiety);
    let phq9 = phq9_outcome(request)?;
    let gad7 = gad7_outcome(request)?;

    let mut screening_summary =
        format!("PHQ-4 depression subscore {depression}/6 and anxiety subscore {anxiety}/6.");
    if let Some(phq9) = &phq9 {
        screening_summary.push_str(&format!(" PHQ-9 total {}/27 ({}).", phq9.total, phq9.severity));
    }
    if let Some(gad7) = &gad7 {
        screening_summary.push_str(&format!(" GAD-7 total {}/21 ({}).", gad7.total, gad7.severity));
    }

    let mut recommended_actions = follow_up.message;
    if phq9.as_ref().is_some_and(|p| p.recommend_cssrs) {
        recommended_actions.push(' ');
        recommended_actions.push_str(phq9::CSSRS_RECOMMENDED_MESSAGE);
    }

    let phq9_total = phq9.as_ref().map(|p| p.total);
    let gad7_total = gad7.as_ref().map(|g| g.total);
    let service_tier = if phq9_total.is_none() && gad7_total.is_none() {
        TIER_NOT_DETERMINED.to_string()
    } else {
        let resolved = tier::determine_tier(phq9_total, gad7_total)?;
        format!("{}: {}", resolved.tier.name, resolved.tier.label)
    };

    Ok(Summary {
        screening_summary,
        recommended_actions,
        service_tier,
        feedback: rating.map(|r| format!("Client rated this screening {r} out of 5.")),
    })
}

fn phq9_outcome(request: &SummaryRequest) -> Result<Option<Phq9Outcome>, ValidationError> {
    if let Some(total) = request.phq9_total {
        let total = check_score("phq9_total", total, phq9::TOTAL_RANGE)?;
        // Item 9 is unknown without item-level answers; only the total can
        // trigger the C-SSRS.
        return Ok(Some(Phq9Outcome {
            total,
            severity: phq9::severity(total),
            recommend_cssrs: phq9::recommends_cssrs(0, total),
        }));
    }

    let items = request.responses.with_prefix("phq9_q");
    if items.is_empty() {
        return Ok(None);
    }
    let scored = phq9::score(&items)?;
    Ok(Some(Phq9Outcome {
        total: scored.total_score,
        severity: scored.severity,
        recommend_cssrs: scored.recommend_cssrs,
    }))
}

fn gad7_outcome(request: &SummaryRequest) -> Result<Option<Gad7Outcome>, ValidationError> {
    if let Some(total) = request.gad7_total {
        let total = check_score("gad7_total", total, gad7::TOTAL_RANGE)?;
        return Ok(Some(Gad7Outcome {
            total,
            severity: gad7::severity(total),
        }));
    }

    let items = request.responses.with_prefix("gad7_q");
    if items.is_empty() {
        return Ok(None);
    }
    let scored = gad7::score(&items)?;
    Ok(Some(Gad7Outcome {
        total: scored.total_score,
        severity: scored.severity,
    }))
}
