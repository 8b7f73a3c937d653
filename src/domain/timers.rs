//! Per-zone timer lists and the `-t` token parser
//!
//! A timer list is written as eight comma-separated values, one per zone:
//! `10,10,5,5,30,30,1,255`. Every value must be in 1-255.

use std::fmt;
use std::str::FromStr;

use crate::domain::{TimerParseError, Zone, ZONE_COUNT};

const DELIMITER: char = ',';

/// Timer values for zones 1-8, each in 1-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerList([u8; ZONE_COUNT]);

impl TimerList {
    /// Build a list from raw values as read back from a unit.
    pub fn new(values: [u8; ZONE_COUNT]) -> Result<Self, TimerParseError> {
        match values.iter().position(|v| *v == 0) {
            Some(i) => Err(TimerParseError::ZeroValue { field: i + 1 }),
            None => Ok(Self(values)),
        }
    }

    /// Parse a `-t` token in one left-to-right pass.
    ///
    /// Digits accumulate into the current field; a comma closes it. The token may end
    /// right after the eighth value, with or without a trailing comma.
    ///
    /// # Errors
    /// - any character other than an ASCII digit or comma
    /// - an empty field (leading comma or `,,`)
    /// - a field equal to zero or above 255
    /// - any count of fields other than eight
    pub fn parse(token: &str) -> Result<Self, TimerParseError> {
        let mut slots = Slots::default();
        let mut field: Option<u16> = None;

        for (position, ch) in token.char_indices() {
            if let Some(digit) = ch.to_digit(10) {
                let value = field.unwrap_or(0) * 10 + digit as u16;
                if value > u16::from(u8::MAX) {
                    return Err(TimerParseError::OutOfRange {
                        field: slots.len + 1,
                    });
                }
                field = Some(value);
            } else if ch == DELIMITER {
                let value = field.take().ok_or(TimerParseError::EmptyField {
                    field: slots.len + 1,
                })?;
                slots.push(value as u8)?;
            } else {
                return Err(TimerParseError::InvalidCharacter { ch, position });
            }
        }
        if let Some(value) = field {
            slots.push(value as u8)?;
        }

        slots.finish()
    }

    pub fn values(&self) -> &[u8; ZONE_COUNT] {
        &self.0
    }

    /// Timer of a single zone.
    pub fn get(&self, zone: Zone) -> u8 {
        self.0[zone.index()]
    }

    /// `(zone, timer)` pairs in zone order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, u8)> + '_ {
        Zone::all().zip(self.0.iter().copied())
    }
}

impl FromStr for TimerList {
    type Err = TimerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Fixed eight-slot accumulator; a ninth value is an error, never an overwrite.
#[derive(Default)]
struct Slots {
    values: [u8; ZONE_COUNT],
    len: usize,
}

impl Slots {
    fn push(&mut self, value: u8) -> Result<(), TimerParseError> {
        if value == 0 {
            return Err(TimerParseError::ZeroValue {
                field: self.len + 1,
            });
        }
        let slot = self
            .values
            .get_mut(self.len)
            .ok_or(TimerParseError::TooManyValues)?;
        *slot = value;
        self.len += 1;
        Ok(())
    }

    fn finish(self) -> Result<TimerList, TimerParseError> {
        if self.len == ZONE_COUNT {
            Ok(TimerList(self.values))
        } else {
            Err(TimerParseError::TooFewValues { count: self.len })
        }
    }
}
