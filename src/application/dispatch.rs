//! Dispatch of a validated operation to the device client

use tracing::{info, instrument};

use crate::domain::{Operation, StatusMask, TimerList, Zone};
use crate::exitcode;
use crate::infrastructure::traits::DeviceClient;
use crate::infrastructure::DeviceError;

/// What a successful device call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Command acknowledged, nothing to show.
    Done,
    /// State of the zone asked for with `status -z`.
    ZoneState { zone: Zone, on: bool },
    /// Full status mask when `status` was given no zone.
    Mask(StatusMask),
    /// Timers read back from a unit.
    Timers(TimerList),
    /// At least one unit answered the communication check.
    Online,
}

/// Result of one dispatched operation.
#[derive(Debug)]
pub enum Outcome {
    Succeeded(Report),
    Failed(DeviceError),
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// A zone status answer maps to 0 (off) or 1 (on); a failure keeps the
    /// client's result code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Succeeded(Report::ZoneState { on: true, .. }) => exitcode::ZONE_ON,
            Outcome::Succeeded(Report::ZoneState { on: false, .. }) => exitcode::ZONE_OFF,
            Outcome::Succeeded(_) => exitcode::OK,
            Outcome::Failed(e) => e.code(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded(_))
    }
}

/// Runs exactly one device call per operation. No retries.
pub struct DispatchService<C> {
    client: C,
}

impl<C: DeviceClient> DispatchService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Give back the client, e.g. to inspect a test double.
    pub fn into_client(self) -> C {
        self.client
    }

    /// Execute `operation` against the client and map the result.
    #[instrument(skip(self), fields(command = %operation.command()))]
    pub fn execute(&mut self, operation: Operation) -> Outcome {
        let result = match operation {
            Operation::On { unit, zone } => {
                info!("ON -- Unit:[{}] Zone:[{}]", unit, zone);
                self.client.zone_on(unit, zone).map(|_| Report::Done)
            }
            Operation::Off { unit, zone } => {
                info!("OFF -- Unit:[{}] Zone:[{}]", unit, zone);
                self.client.zone_off(unit, zone).map(|_| Report::Done)
            }
            Operation::AllOff { unit } => {
                info!("ALLOFF -- Unit:[{}]", unit);
                self.client.all_off(unit).map(|_| Report::Done)
            }
            Operation::Status { unit, zone } => {
                info!("STATUS -- Unit:[{}]", unit);
                self.client.get_status(unit).map(|mask| match zone {
                    Some(zone) => Report::ZoneState {
                        zone,
                        on: mask.is_on(zone),
                    },
                    None => Report::Mask(mask),
                })
            }
            Operation::GlobalAllOff => {
                info!("GALLOFF -- Unit:[All] Zone:[All]");
                self.client.global_all_off().map(|_| Report::Done)
            }
            Operation::ComCheck => {
                info!("COMCHECK");
                self.client.com_check().map(|_| Report::Online)
            }
            Operation::GetTimers { unit } => {
                info!("GETTIMERS -- Unit:[{}]", unit);
                self.client.get_zone_timers(unit).map(Report::Timers)
            }
            Operation::SetTimers { unit, timers } => {
                info!("SETTIMERS -- Unit:[{}] Timers:[{}]", unit, timers);
                self.client
                    .set_zone_timers(unit, &timers)
                    .map(|_| Report::Done)
            }
        };

        match result {
            Ok(report) => {
                info!("{} succeeded", operation.command());
                Outcome::Succeeded(report)
            }
            Err(e) => {
                info!("{} failed: {}", operation.command(), e);
                Outcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zone_state_on_when_mapping_exit_code_then_one() {
        let zone = Zone::try_from(4_i64).unwrap();
        assert_eq!(
            Outcome::Succeeded(Report::ZoneState { zone, on: true }).exit_code(),
            1
        );
        assert_eq!(
            Outcome::Succeeded(Report::ZoneState { zone, on: false }).exit_code(),
            0
        );
    }

    #[test]
    fn given_failure_when_mapping_exit_code_then_client_code_passes_through() {
        let outcome = Outcome::Failed(DeviceError::NoResponse {
            target: "unit 1".into(),
        });
        assert!(!outcome.is_success());
        assert_eq!(outcome.exit_code(), exitcode::UNAVAILABLE);
    }

    #[test]
    fn given_mask_report_when_mapping_exit_code_then_success() {
        let outcome = Outcome::Succeeded(Report::Mask(StatusMask::new(0xFF)));
        assert_eq!(outcome.exit_code(), exitcode::OK);
    }
}
