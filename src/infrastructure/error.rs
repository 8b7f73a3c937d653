//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;

/// Failures of the device protocol client.
///
/// Each carries the integer result code surfaced as the process exit status.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("cannot open device {device}: {source}")]
    Open {
        device: String,
        #[source]
        source: serialport::Error,
    },

    #[error("I/O error on serial line: {0}")]
    Io(#[from] std::io::Error),

    #[error("no response from {target}")]
    NoResponse { target: String },

    #[error("unexpected response from {target}: {detail}")]
    BadResponse { target: String, detail: String },
}

impl DeviceError {
    /// Result code reported for this failure.
    pub fn code(&self) -> i32 {
        match self {
            DeviceError::Open { .. } => exitcode::NOINPUT,
            DeviceError::Io(_) => exitcode::IOERR,
            DeviceError::NoResponse { .. } => exitcode::UNAVAILABLE,
            DeviceError::BadResponse { .. } => exitcode::PROTOCOL,
        }
    }
}

/// Result type for device client calls.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Infrastructure errors wrap application errors and add device-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Device(#[from] DeviceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_device_errors_when_mapping_codes_then_none_collide_with_status_answers() {
        let errors = [
            DeviceError::Open {
                device: "/dev/null".into(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "gone"),
            },
            DeviceError::Io(std::io::Error::other("broken pipe")),
            DeviceError::NoResponse {
                target: "unit 1".into(),
            },
            DeviceError::BadResponse {
                target: "unit 1".into(),
                detail: "short frame".into(),
            },
        ];
        for e in &errors {
            assert_ne!(e.code(), exitcode::ZONE_OFF, "{e}");
            assert_ne!(e.code(), exitcode::ZONE_ON, "{e}");
        }
    }
}
