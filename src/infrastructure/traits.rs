//! I/O boundary traits for testability
//!
//! The dispatcher only talks to a `DeviceClient`, so it can be exercised with
//! a recording double instead of a serial line.

use crate::domain::{StatusMask, TimerList, Unit, Zone};
use crate::infrastructure::DeviceResult;

/// Conversation with the controller modules on one bus.
pub trait DeviceClient {
    /// Open the valve of `zone` on `unit`.
    fn zone_on(&mut self, unit: Unit, zone: Zone) -> DeviceResult<()>;

    /// Close the valve of `zone` on `unit`.
    fn zone_off(&mut self, unit: Unit, zone: Zone) -> DeviceResult<()>;

    /// Close every valve of `unit`.
    fn all_off(&mut self, unit: Unit) -> DeviceResult<()>;

    /// Read which valves of `unit` are open.
    fn get_status(&mut self, unit: Unit) -> DeviceResult<StatusMask>;

    /// Close every valve on every unit of the bus.
    fn global_all_off(&mut self) -> DeviceResult<()>;

    /// Succeeds when at least one unit answers on the bus.
    fn com_check(&mut self) -> DeviceResult<()>;

    /// Read the per-zone timers stored on `unit`.
    fn get_zone_timers(&mut self, unit: Unit) -> DeviceResult<TimerList>;

    /// Store per-zone timers on `unit`.
    fn set_zone_timers(&mut self, unit: Unit, timers: &TimerList) -> DeviceResult<()>;
}
