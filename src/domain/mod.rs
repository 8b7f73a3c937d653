//! Domain layer: command model, timer lists and validation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod command;
pub mod entities;
pub mod error;
pub mod operation;
pub mod timers;

pub use command::{Command, Requirement, Requirements};
pub use entities::*;
pub use error::{DomainError, TimerParseError, ValidationError};
pub use operation::{Operation, RawOptions};
pub use timers::TimerList;
