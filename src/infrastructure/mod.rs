//! Infrastructure layer: device I/O
//!
//! This layer implements the I/O boundary traits against real hardware.

pub mod error;
pub mod rain8;
pub mod traits;

pub use error::{DeviceError, DeviceResult, InfraError};
pub use rain8::Rain8Client;
