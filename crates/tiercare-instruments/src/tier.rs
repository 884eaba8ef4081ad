//! Care-intensity tier resolution from PHQ-9 and GAD-7 totals.
//!
//! Totals are taken as already aggregated; only their field-level bounds
//! are checked here. The more severe instrument determines the tier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::{gad7, phq9};
use crate::scoring::{Band, ScoreRange, classify};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    SelfManagement,
    LowIntensity,
    ModerateIntensity,
    HighIntensity,
}

impl Tier {
    pub fn level(self) -> u8 {
        match self {
            Tier::SelfManagement => 1,
            Tier::LowIntensity => 2,
            Tier::ModerateIntensity => 3,
            Tier::HighIntensity => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::SelfManagement => "Self-management and monitoring",
            Tier::LowIntensity => "Low intensity services",
            Tier::ModerateIntensity => "Moderate intensity services",
            Tier::HighIntensity => "High intensity services",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::SelfManagement => {
                "Symptoms fall below the threshold for low intensity interventions. Continue monitoring and provide psychoeducation."
            }
            Tier::LowIntensity => {
                "Recommend guided self-help, brief interventions, or digital therapeutics."
            }
            Tier::ModerateIntensity => {
                "Recommend structured psychological therapies or psychiatric consultation."
            }
            Tier::HighIntensity => {
                "Recommend specialist mental health services and multidisciplinary support."
            }
        }
    }

    pub fn definition(self) -> TierDefinition {
        TierDefinition {
            level: self.level(),
            name: format!("Tier {}", self.level()),
            label: self.label().to_string(),
            description: self.description().to_string(),
        }
    }
}

const PHQ9_TIERS: &[Band<Tier>] = &[
    Band::new(0, 4, Tier::SelfManagement),
    Band::new(5, 9, Tier::LowIntensity),
    Band::new(10, 19, Tier::ModerateIntensity),
    Band::new(20, 27, Tier::HighIntensity),
];

const GAD7_TIERS: &[Band<Tier>] = &[
    Band::new(0, 4, Tier::SelfManagement),
    Band::new(5, 9, Tier::LowIntensity),
    Band::new(10, 14, Tier::ModerateIntensity),
    Band::new(15, 21, Tier::HighIntensity),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierDefinition {
    pub level: u8,
    pub name: String,
    pub label: String,
    pub description: String,
}

/// One instrument's own contribution to the resolved tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolTier {
    pub score: u32,
    pub tier: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolBreakdown {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub phq9: Option<ToolTier>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[ts(optional)]
    pub gad7: Option<ToolTier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierResult {
    pub tier: TierDefinition,
    pub tool_breakdown: ToolBreakdown,
}

pub fn phq9_tier(total: u32) -> Result<Tier, ValidationError> {
    tier_for("phq9_total", total, PHQ9_TIERS, phq9::TOTAL_RANGE)
}

pub fn gad7_tier(total: u32) -> Result<Tier, ValidationError> {
    tier_for("gad7_total", total, GAD7_TIERS, gad7::TOTAL_RANGE)
}

/// Resolve the service tier from whichever totals are available.
pub fn determine_tier(
    phq9_total: Option<u32>,
    gad7_total: Option<u32>,
) -> Result<TierResult, ValidationError> {
    let phq9 = phq9_total
        .map(|score| phq9_tier(score).map(|tier| (score, tier)))
        .transpose()?;
    let gad7 = gad7_total
        .map(|score| gad7_tier(score).map(|tier| (score, tier)))
        .transpose()?;

    let tier = [phq9, gad7]
        .into_iter()
        .flatten()
        .map(|(_, tier)| tier)
        .max()
        .ok_or(ValidationError::MissingScores)?;

    let breakdown = |entry: Option<(u32, Tier)>| {
        entry.map(|(score, tier)| ToolTier {
            score,
            tier: tier.level(),
        })
    };

    Ok(TierResult {
        tier: tier.definition(),
        tool_breakdown: ToolBreakdown {
            phq9: breakdown(phq9),
            gad7: breakdown(gad7),
        },
    })
}

fn tier_for(
    field: &str,
    total: u32,
    bands: &[Band<Tier>],
    range: ScoreRange,
) -> Result<Tier, ValidationError> {
    classify(bands, total).ok_or_else(|| ValidationError::out_of_range(field, range))
}
