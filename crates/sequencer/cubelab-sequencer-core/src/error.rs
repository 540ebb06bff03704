//! Error types for the sequencer core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencerError {
    #[error("invalid sequencer config: {reason}")]
    InvalidConfig { reason: String },

    #[error("unknown sequencer command '{0}'")]
    UnknownCommand(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),
}
