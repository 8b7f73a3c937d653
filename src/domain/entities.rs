//! Addressing types for the Rain8Net bus

use std::fmt;

use crate::domain::ValidationError;

/// Number of valve outputs on one unit.
pub const ZONE_COUNT: usize = 8;

/// Address of a controller module on the bus (1-254).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unit(u8);

impl Unit {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 254;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Unit {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::UnitOutOfRange(value))
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the eight valve outputs of a unit (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = ZONE_COUNT as u8;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot of this zone in status masks and timer lists.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All zones of a unit in ascending order.
    pub fn all() -> impl Iterator<Item = Zone> {
        (Self::MIN..=Self::MAX).map(Zone)
    }
}

impl TryFrom<i64> for Zone {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::ZoneOutOfRange(value))
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-unit valve state as reported by the status query.
///
/// Bit 0 is zone 1, bit 7 is zone 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusMask(u8);

impl StatusMask {
    pub fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether the valve of `zone` is open.
    pub fn is_on(self, zone: Zone) -> bool {
        self.0 & (1 << zone.index()) != 0
    }
}

impl fmt::Display for StatusMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like setting.
///
/// Falls back to the input unchanged when a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
