//! Error types for the library loan crate
//!
//! - `LoanError`: Loan manager errors (only the fee calculation can fail)
//! - `ParseError`: Desk command parsing errors
//! - `ConfigError`: Invalid environment configuration

use thiserror::Error;

/// Loan manager errors
///
/// Rejected borrows and returns are not errors; they come back as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    #[error("Overdue days cannot be negative.")]
    NegativeOverdueDays(i64),
}

/// Parse error for desk commands
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
