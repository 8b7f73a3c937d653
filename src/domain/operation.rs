//! Validation of raw options into a single executable operation

use crate::domain::{Command, Requirement, TimerList, Unit, ValidationError, Zone};

/// Options as given on the command line, before any checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub device: String,
    pub command_keyword: Option<String>,
    pub unit: Option<i64>,
    pub zone: Option<i64>,
    pub timers: Option<TimerList>,
    pub verbose: bool,
}

/// A fully validated device operation.
///
/// Each variant carries exactly the parameters its command needs, so a value of this
/// type can only exist once the requirement matrix has been satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    On { unit: Unit, zone: Zone },
    Off { unit: Unit, zone: Zone },
    AllOff { unit: Unit },
    /// Without a zone the full status mask is reported.
    Status { unit: Unit, zone: Option<Zone> },
    GlobalAllOff,
    ComCheck,
    GetTimers { unit: Unit },
    SetTimers { unit: Unit, timers: TimerList },
}

impl Operation {
    /// Turn raw options into an operation, or report the first violated requirement.
    ///
    /// Checks run in order: command keyword, unit, zone, timers. Parameters a command
    /// does not use are ignored, whatever their value.
    pub fn validate(raw: &RawOptions) -> Result<Operation, ValidationError> {
        let keyword = raw
            .command_keyword
            .as_deref()
            .ok_or(ValidationError::MissingCommand)?;
        let command = Command::from_keyword(keyword)
            .ok_or_else(|| ValidationError::UnknownCommand(keyword.to_string()))?;
        let req = command.requirements();
        let name = command.keyword();

        let unit = check(req.unit, raw.unit, || ValidationError::MissingUnit(name))?
            .map(Unit::try_from)
            .transpose()?;
        let zone = check(req.zone, raw.zone, || ValidationError::MissingZone(name))?
            .map(Zone::try_from)
            .transpose()?;
        let timers = check(req.timers, raw.timers, || ValidationError::MissingTimers(name))?;

        let missing_unit = || ValidationError::MissingUnit(name);
        let missing_zone = || ValidationError::MissingZone(name);
        let op = match command {
            Command::On => Operation::On {
                unit: unit.ok_or_else(missing_unit)?,
                zone: zone.ok_or_else(missing_zone)?,
            },
            Command::Off => Operation::Off {
                unit: unit.ok_or_else(missing_unit)?,
                zone: zone.ok_or_else(missing_zone)?,
            },
            Command::AllOff => Operation::AllOff {
                unit: unit.ok_or_else(missing_unit)?,
            },
            Command::Status => Operation::Status {
                unit: unit.ok_or_else(missing_unit)?,
                zone,
            },
            Command::GlobalAllOff => Operation::GlobalAllOff,
            Command::ComCheck => Operation::ComCheck,
            Command::GetTimers => Operation::GetTimers {
                unit: unit.ok_or_else(missing_unit)?,
            },
            Command::SetTimers => Operation::SetTimers {
                unit: unit.ok_or_else(missing_unit)?,
                timers: timers.ok_or(ValidationError::MissingTimers(name))?,
            },
        };
        Ok(op)
    }

    pub fn command(&self) -> Command {
        match self {
            Operation::On { .. } => Command::On,
            Operation::Off { .. } => Command::Off,
            Operation::AllOff { .. } => Command::AllOff,
            Operation::Status { .. } => Command::Status,
            Operation::GlobalAllOff => Command::GlobalAllOff,
            Operation::ComCheck => Command::ComCheck,
            Operation::GetTimers { .. } => Command::GetTimers,
            Operation::SetTimers { .. } => Command::SetTimers,
        }
    }

    pub fn unit(&self) -> Option<Unit> {
        match self {
            Operation::On { unit, .. }
            | Operation::Off { unit, .. }
            | Operation::AllOff { unit }
            | Operation::Status { unit, .. }
            | Operation::GetTimers { unit }
            | Operation::SetTimers { unit, .. } => Some(*unit),
            Operation::GlobalAllOff | Operation::ComCheck => None,
        }
    }

    pub fn zone(&self) -> Option<Zone> {
        match self {
            Operation::On { zone, .. } | Operation::Off { zone, .. } => Some(*zone),
            Operation::Status { zone, .. } => *zone,
            _ => None,
        }
    }

    pub fn timers(&self) -> Option<&TimerList> {
        match self {
            Operation::SetTimers { timers, .. } => Some(timers),
            _ => None,
        }
    }
}

/// Apply one cell of the requirement matrix to a raw value.
fn check<T>(
    requirement: Requirement,
    value: Option<T>,
    missing: impl FnOnce() -> ValidationError,
) -> Result<Option<T>, ValidationError> {
    match (requirement, value) {
        (Requirement::Required, None) => Err(missing()),
        (Requirement::Unused, _) => Ok(None),
        (_, value) => Ok(value),
    }
}
