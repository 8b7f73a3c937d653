//! Rain8Net irrigation controller
//!
//! Turns command-line flags into exactly one validated [`domain::Operation`] and
//! runs it against the valve modules on a serial bus.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
