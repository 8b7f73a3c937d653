//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueHint};

use crate::config::Settings;
use crate::domain::{RawOptions, TimerList, TimerParseError};

const AFTER_HELP: &str = "\
Commands:
  on, off      switch one zone          requires -u and -z
  alloff       close all zones of unit  requires -u
  status       read zone state          requires -u, -z optional
  galloff      close all zones on bus
  comcheck     check a unit answers
  gettimers    read zone timers         requires -u
  settimers    write zone timers        requires -u and -t

Exit status:
  0 or an error code for on/off/alloff/galloff/comcheck/gettimers/settimers
  0 (off) or 1 (on) for status with -z
  64 for invalid arguments";

/// Command-line controller for Rain8Net irrigation valve modules
#[derive(Parser, Debug)]
#[command(name = "rain8net")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Serial device the bus is attached to [default: /dev/ttyUSB0, or from config]
    #[arg(short = 'd', value_name = "DEVICE", value_hint = ValueHint::FilePath)]
    pub device: Option<String>,

    /// One of: on, off, alloff, status, galloff, comcheck, gettimers, settimers
    #[arg(short = 'c', value_name = "COMMAND")]
    pub command: Option<String>,

    /// Unit number (1-254)
    #[arg(short = 'u', value_name = "UNIT", allow_negative_numbers = true)]
    pub unit: Option<i64>,

    /// Zone number (1-8)
    #[arg(short = 'z', value_name = "ZONE", allow_negative_numbers = true)]
    pub zone: Option<i64>,

    /// All 8 zone timers, comma separated, each 1-255
    #[arg(short = 't', value_name = "T1,...,T8", value_parser = parse_timers)]
    pub timers: Option<TimerList>,

    /// Print diagnostics (-vv for debug output)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,
}

fn parse_timers(token: &str) -> Result<TimerList, TimerParseError> {
    TimerList::parse(token)
}

impl Cli {
    /// Hand the parsed flags over as one raw options record.
    ///
    /// `-d` wins over the configured device.
    pub fn raw_options(&self, settings: &Settings) -> RawOptions {
        RawOptions {
            device: self
                .device
                .clone()
                .unwrap_or_else(|| settings.device.clone()),
            command_keyword: self.command.clone(),
            unit: self.unit,
            zone: self.zone,
            timers: self.timers,
            verbose: self.verbose > 0,
        }
    }
}
