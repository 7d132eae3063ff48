use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid configuration value for {key}: '{value}' ({reason})")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}
