//! Runs one invocation: settings, validation, device, dispatch, report

use tracing::{debug, info, instrument};

use crate::application::{DispatchService, Outcome, Report};
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Operation, RawOptions};
use crate::exitcode;
use crate::infrastructure::traits::DeviceClient;
use crate::infrastructure::Rain8Client;

/// Execute the invocation described by `cli`; returns the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(exitcode::OK);
    }

    let raw = cli.raw_options(&settings);
    let operation = Operation::validate(&raw)?;

    let client = Rain8Client::open(&raw.device, settings.response_timeout())?;
    info!("Opened Rain8Net device:[{}] successfully.", raw.device);

    Ok(run_operation(client, operation, &raw))
}

/// Dispatch an already validated operation and print its outcome.
#[instrument(skip(client, raw))]
pub fn run_operation<C: DeviceClient>(client: C, operation: Operation, raw: &RawOptions) -> i32 {
    let mut service = DispatchService::new(client);
    let outcome = service.execute(operation);
    print_outcome(&outcome, raw.verbose);
    outcome.exit_code()
}

fn print_outcome(outcome: &Outcome, verbose: bool) {
    match outcome {
        Outcome::Succeeded(report) => {
            match report {
                Report::Done => {}
                Report::ZoneState { zone, on } => output::zone_state(*zone, *on),
                Report::Mask(mask) => output::status_mask(*mask),
                Report::Timers(timers) => output::timers(timers, verbose),
                Report::Online => {
                    if verbose {
                        output::info("At least 1 unit is online.");
                    }
                }
            }
            if verbose {
                output::success("SUCCESS");
            }
        }
        Outcome::Failed(e) => output::failure(e),
    }
}
