//! CLI error types.

use stimulus_core::types::{CatalogError, ConfigError, GeometryError, ParticipantError};
use thiserror::Error;

/// Errors surfaced by `stimuli` subcommands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings or experiment file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Experiment catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Participant id or seed was malformed.
    #[error("Participant error: {0}")]
    Participant(#[from] ParticipantError),

    /// Geometry input was malformed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Referenced file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested round is outside the participant's sequence.
    #[error("Round {round} (offset {offset}) is outside the {rounds} decision rounds")]
    RoundOutOfRange {
        /// App round number
        round: usize,
        /// App round that shows the first decision frame
        offset: usize,
        /// Decision rounds available
        rounds: usize,
    },

    /// Rendering the output failed.
    #[error("Output error: {0}")]
    Output(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_participant_error() {
        let err: CliError = ParticipantError::EmptyIdentifier.into();
        assert!(matches!(err, CliError::Participant(_)));
    }

    #[test]
    fn test_round_out_of_range_display() {
        let err = CliError::RoundOutOfRange {
            round: 30,
            offset: 3,
            rounds: 20,
        };
        assert_eq!(
            err.to_string(),
            "Round 30 (offset 3) is outside the 20 decision rounds"
        );
    }
}
