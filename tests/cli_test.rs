//! End-to-end argument interpretation: flags -> RawOptions -> Operation

use clap::error::ErrorKind;
use clap::Parser;
use rstest::rstest;

use rain8net::cli::commands::execute_command;
use rain8net::cli::{parse_exit_code, Cli, CliError};
use rain8net::config::Settings;
use rain8net::domain::{Operation, ValidationError};
use rain8net::exitcode;

fn validate(args: &[&str]) -> Result<Operation, ValidationError> {
    let mut argv = vec!["rain8net"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    Operation::validate(&cli.raw_options(&Settings::default()))
}

#[test]
fn given_on_unit_zone_flags_when_interpreting_then_on_operation() {
    let op = validate(&["-c", "on", "-u", "5", "-z", "3"]).unwrap();
    assert!(matches!(op, Operation::On { unit, zone } if unit.get() == 5 && zone.get() == 3));
}

#[test]
fn given_settimers_flags_when_interpreting_then_settimers_operation() {
    let op = validate(&["-c", "settimers", "-u", "10", "-t", "1,2,3,4,5,6,7,8"]).unwrap();
    match op {
        Operation::SetTimers { unit, timers } => {
            assert_eq!(unit.get(), 10);
            assert_eq!(timers.values(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        }
        other => panic!("expected settimers, got {other:?}"),
    }
}

#[rstest]
#[case("1,2,3,0,5,6,7,8")]
#[case("1,2,3,4,5,6,7")]
#[case("1,2,3,4,5,6,7,8,9")]
#[case("1,2,3,4,a,6,7,8")]
#[case("1,2,3,4,5,6,7,300")]
fn given_malformed_timer_token_when_interpreting_then_argument_error(#[case] token: &str) {
    let err = Cli::try_parse_from(["rain8net", "-c", "settimers", "-u", "10", "-t", token])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn given_malformed_timer_token_with_other_command_when_interpreting_then_still_fails() {
    let result = Cli::try_parse_from(["rain8net", "-c", "on", "-u", "1", "-z", "1", "-t", "0"]);
    assert!(result.is_err());
}

#[test]
fn given_galloff_when_interpreting_then_no_unit_needed() {
    assert_eq!(validate(&["-c", "galloff"]), Ok(Operation::GlobalAllOff));
}

#[test]
fn given_mixed_case_keyword_when_interpreting_then_resolved() {
    assert_eq!(validate(&["-c", "ComCheck"]), Ok(Operation::ComCheck));
}

#[test]
fn given_negative_unit_when_interpreting_then_out_of_range() {
    assert_eq!(
        validate(&["-c", "alloff", "-u", "-4"]),
        Err(ValidationError::UnitOutOfRange(-4))
    );
}

#[test]
fn given_status_without_zone_when_interpreting_then_accepted() {
    assert!(matches!(
        validate(&["-c", "status", "-u", "1"]),
        Ok(Operation::Status { zone: None, .. })
    ));
}

#[test]
fn given_non_numeric_unit_when_interpreting_then_argument_error() {
    let err = Cli::try_parse_from(["rain8net", "-c", "on", "-u", "five"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn given_unknown_flag_when_interpreting_then_argument_error() {
    let err = Cli::try_parse_from(["rain8net", "-q"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn given_validation_failure_when_reported_then_usage_exit_code() {
    let err = CliError::from(validate(&["-c", "on", "-u", "1"]).unwrap_err());
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(err.shows_usage());
}

#[rstest]
#[case(&["-c", "on", "-u", "1", "-q"], exitcode::USAGE)]
#[case(&["-c", "settimers", "-u", "1", "-t", "1,2,3"], exitcode::USAGE)]
#[case(&["-u", "many"], exitcode::USAGE)]
#[case(&["--help"], exitcode::OK)]
#[case(&["--version"], exitcode::OK)]
fn given_unparsable_arguments_when_mapping_exit_code_then_usage_unless_help_or_version(
    #[case] args: &[&str],
    #[case] expected: i32,
) {
    let mut argv = vec!["rain8net"];
    argv.extend_from_slice(args);
    let err = Cli::try_parse_from(argv).unwrap_err();
    assert_eq!(parse_exit_code(&err), expected);
}

#[test]
fn given_missing_zone_and_absent_device_when_executing_then_fails_validation_before_open() {
    let cli = Cli::try_parse_from(["rain8net", "-d", "/nonexistent/tty", "-c", "on", "-u", "1"])
        .expect("arguments should parse");

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(err.shows_usage());
}

#[test]
fn given_valid_operation_and_absent_device_when_executing_then_reaches_device_open() {
    let cli = Cli::try_parse_from([
        "rain8net",
        "-d",
        "/nonexistent/tty",
        "-c",
        "on",
        "-u",
        "1",
        "-z",
        "2",
    ])
    .expect("arguments should parse");

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert!(!err.shows_usage());
}

#[test]
fn given_show_config_when_executing_then_succeeds_without_opening_device() {
    let cli = Cli::try_parse_from(["rain8net", "-d", "/nonexistent/tty", "--show-config"])
        .expect("arguments should parse");

    assert_eq!(execute_command(&cli).unwrap(), exitcode::OK);
}
