//! tiercare-instruments
//!
//! Mental-health screening instruments and the scoring engine behind them.
//! Pure computation, no I/O. Validates response sets against each
//! instrument's expected schema, aggregates scores, classifies severity and
//! risk, and resolves a combined care-intensity tier.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod responses;
pub mod scoring;
pub mod summary;
pub mod tier;
pub mod validation;

use catalog::Questionnaire;
use error::InstrumentError;
use responses::ResponseSet;
use scoring::ExpectedItem;
use validation::{Answers, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier, also the prefix of its question ids (e.g. "phq9").
    fn id(&self) -> &str;

    /// Short display name (e.g. "PHQ-9").
    fn name(&self) -> &str;

    /// Presentation data: title, instructions, and ordered questions.
    fn questionnaire(&self) -> &Questionnaire;

    /// The question ids this instrument requires and their valid ranges.
    fn schema(&self) -> &'static [ExpectedItem];

    /// Validate a response set against this instrument's schema.
    fn validate(&self, responses: &ResponseSet) -> Result<Answers, ValidationError> {
        validation::validate(responses, self.schema())
    }
}

/// Return all registered instruments, in presentation order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq4::Phq4),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::cssrs::Cssrs),
    ]
}

/// Look up an instrument by ID, ignoring case.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    let key = id.to_lowercase();
    all_instruments()
        .into_iter()
        .find(|i| i.id() == key)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
