//! Process exit codes (BSD sysexits.h compatible)
//!
//! Device failures use sysexits values so they never collide with the
//! 0/1 answer of a zone status query.

/// Successful termination
pub const OK: i32 = 0;

/// Status query: zone valve closed
pub const ZONE_OFF: i32 = 0;

/// Status query: zone valve open
pub const ZONE_ON: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Cannot open input (serial device)
pub const NOINPUT: i32 = 66;

/// Service unavailable (no unit answered)
pub const UNAVAILABLE: i32 = 69;

/// Input/output error
pub const IOERR: i32 = 74;

/// Remote error in protocol
pub const PROTOCOL: i32 = 76;

/// Configuration error
pub const CONFIG: i32 = 78;
