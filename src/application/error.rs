//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, ValidationError};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },
}

impl From<ValidationError> for ApplicationError {
    fn from(e: ValidationError) -> Self {
        Self::Domain(e.into())
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
