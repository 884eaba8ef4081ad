use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("Unknown questionnaire '{0}'.")]
    UnknownInstrument(String),
}
