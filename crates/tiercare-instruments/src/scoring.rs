use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive range of valid integer values for an answer or a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// 0 = "Not at all" through 3 = "Nearly every day".
pub const LIKERT: ScoreRange = ScoreRange::new(0, 3);

/// 0 = No, 1 = Yes.
pub const YES_NO: ScoreRange = ScoreRange::new(0, 1);

/// One entry of an instrument's expected schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedItem {
    pub id: &'static str,
    pub range: ScoreRange,
}

impl ExpectedItem {
    pub const fn new(id: &'static str, range: ScoreRange) -> Self {
        Self { id, range }
    }
}

/// A row of an ordered rule table: scores in `lower..=upper` map to `value`.
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub lower: u32,
    pub upper: u32,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(lower: u32, upper: u32, value: T) -> Self {
        Self { lower, upper, value }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.lower <= score && score <= self.upper
    }
}

/// Scan `bands` in order and return the value of the first band containing
/// `score`.
pub fn classify<T: Copy>(bands: &[Band<T>], score: u32) -> Option<T> {
    bands.iter().find(|b| b.contains(score)).map(|b| b.value)
}

/// Symptom severity label shared by PHQ-9 and GAD-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately severe")]
    ModeratelySevere,
    Severe,
    /// No band covered the total. Unreachable for validated totals.
    Unknown,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately severe",
            Severity::Severe => "Severe",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Look up the severity label for a total, falling back to
/// [`Severity::Unknown`].
pub fn severity(table: &[Band<Severity>], total: u32) -> Severity {
    classify(table, total).unwrap_or(Severity::Unknown)
}
