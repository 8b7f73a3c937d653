//! CLI-level errors (wraps infrastructure errors)

use clap::error::ErrorKind;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ValidationError};
use crate::exitcode;
use crate::infrastructure::{DeviceError, InfraError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

/// Exit code for a failed argument parse: help and version are not failures.
pub fn parse_exit_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exitcode::OK,
        _ => exitcode::USAGE,
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        Self::Infra(e.into())
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::Infra(ApplicationError::from(e).into())
    }
}

impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        Self::Infra(e.into())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::Application(ApplicationError::Domain(_)) => exitcode::USAGE,
                InfraError::Application(ApplicationError::Config { .. }) => {
                    exitcode::CONFIG
                }
                InfraError::Device(e) => e.code(),
            },
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            CliError::Infra(InfraError::Application(ApplicationError::Domain(
                DomainError::Validation(_)
            )))
        )
    }
}
