//! Error types for the CLI application.
//!
//! Engine errors ([`GameError`], [`CardError`]) and configuration errors are
//! folded into [`CliError`] so handlers can propagate with `?`.

use std::fmt;

use croupier_engine::errors::{CardError, GameError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidWager { .. } => CliError::InvalidInput(error.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

// Card text always comes from the command line.
impl From<CardError> for CliError {
    fn from(error: CardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wager_errors_are_user_input() {
        let e = CliError::from(GameError::InvalidWager {
            amount: 0,
            minimum: 1,
            maximum: 10,
        });
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert_eq!(
            e.to_string(),
            "Invalid input: Invalid wager: 0, minimum: 1, maximum: 10"
        );
    }

    #[test]
    fn shoe_exhaustion_is_an_engine_error() {
        let e = CliError::from(GameError::ShoeExhausted);
        assert_eq!(e.to_string(), "Engine error: Shoe exhausted");
    }

    #[test]
    fn card_errors_are_user_input() {
        let e = CliError::from(CardError::InvalidSuit("x".into()));
        assert!(matches!(e, CliError::InvalidInput(_)));
    }
}
