//! Command set and which parameters each command needs

use std::fmt;

/// Operations a Rain8Net bus understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    On,
    Off,
    AllOff,
    Status,
    GlobalAllOff,
    ComCheck,
    GetTimers,
    SetTimers,
}

/// How a command treats one of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be present and in range.
    Required,
    /// May be omitted; range-checked when present.
    Optional,
    /// Ignored if given.
    Unused,
}

/// Parameter requirements of a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub unit: Requirement,
    pub zone: Requirement,
    pub timers: Requirement,
}

impl Requirements {
    const fn new(unit: Requirement, zone: Requirement, timers: Requirement) -> Self {
        Self { unit, zone, timers }
    }
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::On,
        Command::Off,
        Command::AllOff,
        Command::Status,
        Command::GlobalAllOff,
        Command::ComCheck,
        Command::GetTimers,
        Command::SetTimers,
    ];

    /// Keyword accepted by `-c`.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::On => "on",
            Command::Off => "off",
            Command::AllOff => "alloff",
            Command::Status => "status",
            Command::GlobalAllOff => "galloff",
            Command::ComCheck => "comcheck",
            Command::GetTimers => "gettimers",
            Command::SetTimers => "settimers",
        }
    }

    /// Case-insensitive keyword lookup. `None` for anything unrecognized.
    pub fn from_keyword(keyword: &str) -> Option<Command> {
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Row of the requirement matrix for this command.
    pub fn requirements(self) -> Requirements {
        use Requirement::{Optional, Required, Unused};
        match self {
            Command::On | Command::Off => Requirements::new(Required, Required, Unused),
            Command::AllOff | Command::GetTimers => Requirements::new(Required, Unused, Unused),
            Command::Status => Requirements::new(Required, Optional, Unused),
            Command::GlobalAllOff | Command::ComCheck => Requirements::new(Unused, Unused, Unused),
            Command::SetTimers => Requirements::new(Required, Unused, Required),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("on", Command::On)]
    #[case("OFF", Command::Off)]
    #[case("AllOff", Command::AllOff)]
    #[case("status", Command::Status)]
    #[case("GALLOFF", Command::GlobalAllOff)]
    #[case("comcheck", Command::ComCheck)]
    #[case("GetTimers", Command::GetTimers)]
    #[case("settimers", Command::SetTimers)]
    fn given_keyword_in_any_case_when_resolving_then_maps_to_command(
        #[case] keyword: &str,
        #[case] expected: Command,
    ) {
        assert_eq!(Command::from_keyword(keyword), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("start")]
    #[case("on ")]
    #[case("all-off")]
    fn given_unknown_keyword_when_resolving_then_none(#[case] keyword: &str) {
        assert_eq!(Command::from_keyword(keyword), None);
    }

    #[test]
    fn given_all_commands_when_listing_keywords_then_each_is_unique() {
        for command in Command::ALL {
            let matches = Command::ALL
                .iter()
                .filter(|c| c.keyword() == command.keyword())
                .count();
            assert_eq!(matches, 1, "{command} maps to more than one command");
            assert_eq!(Command::from_keyword(command.keyword()), Some(command));
        }
    }

    #[test]
    fn given_requirement_matrix_then_unit_needed_by_all_but_bus_wide_commands() {
        let without_unit: Vec<Command> = Command::ALL
            .into_iter()
            .filter(|c| c.requirements().unit == Requirement::Unused)
            .collect();
        assert_eq!(without_unit, vec![Command::GlobalAllOff, Command::ComCheck]);
    }

    #[test]
    fn given_requirement_matrix_then_only_on_off_require_zone_and_settimers_timers() {
        for command in Command::ALL {
            let req = command.requirements();
            assert_eq!(
                req.zone == Requirement::Required,
                matches!(command, Command::On | Command::Off)
            );
            assert_eq!(
                req.timers == Requirement::Required,
                command == Command::SetTimers
            );
        }
        assert_eq!(Command::Status.requirements().zone, Requirement::Optional);
    }
}
