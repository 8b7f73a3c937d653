//! Application layer: use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod dispatch;
pub mod error;

pub use dispatch::{DispatchService, Outcome, Report};
pub use error::{ApplicationError, ApplicationResult};
