//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::{StatusMask, TimerList, Zone};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print failed device call (red "FAIL" prefix) to stderr
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "FAIL".red(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for data meant to be piped)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print usage text to stderr
pub fn usage(text: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", text);
}

/// Print the state of one zone
pub fn zone_state(zone: Zone, on: bool) {
    let state = if on { "on".green().bold() } else { "off".yellow() };
    println!("zone {}: {}", zone, state);
}

/// Print every zone of a status mask
pub fn status_mask(mask: StatusMask) {
    for zone in Zone::all() {
        zone_state(zone, mask.is_on(zone));
    }
}

/// Print timers; verbose lists one zone per line, otherwise the `-t` token form
pub fn timers(timers: &TimerList, verbose: bool) {
    if verbose {
        for (zone, value) in timers.iter() {
            println!("  zone {}: {}", zone, value.to_string().cyan());
        }
    } else {
        info(timers);
    }
}
