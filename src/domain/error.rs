//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Reasons a `-t` token does not describe a timer list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerParseError {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("timer field {field} is empty")]
    EmptyField { field: usize },

    #[error("timer field {field} is zero (valid range 1-255)")]
    ZeroValue { field: usize },

    #[error("timer field {field} exceeds 255")]
    OutOfRange { field: usize },

    #[error("expected 8 timer values, got {count}")]
    TooFewValues { count: usize },

    #[error("more than 8 timer values given")]
    TooManyValues,
}

/// Validation errors represent a command line that does not describe exactly one operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no command given")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} requires a unit (-u)")]
    MissingUnit(&'static str),

    #[error("unit {0} out of range (1-254)")]
    UnitOutOfRange(i64),

    #[error("{0} requires a zone (-z)")]
    MissingZone(&'static str),

    #[error("zone {0} out of range (1-8)")]
    ZoneOutOfRange(i64),

    #[error("{0} requires all 8 timers (-t)")]
    MissingTimers(&'static str),
}

/// Domain errors are business rule violations, independent of I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
}
