//! Rain8Net wire protocol over a serial line
//!
//! The bus runs at 4800 baud, 8N1. A unit command is three bytes
//! `[0x40, unit, opcode]` and the addressed unit echoes it back. Queries reply
//! with the same header followed by their payload.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, trace};

use crate::domain::{StatusMask, TimerList, Unit, Zone, ZONE_COUNT};
use crate::infrastructure::traits::DeviceClient;
use crate::infrastructure::{DeviceError, DeviceResult};

pub const BAUD_RATE: u32 = 4800;

const UNIT_PREFIX: u8 = 0x40;
const ZONE_ON_BASE: u8 = 0x30;
const ZONE_OFF_BASE: u8 = 0x40;
const UNIT_ALL_OFF: u8 = 0x55;
const READ_STATUS: u8 = 0xF0;
const READ_TIMERS: u8 = 0xF1;
const WRITE_TIMERS: u8 = 0xF2;

const GLOBAL_ALL_OFF_FRAME: [u8; 3] = [0x20, 0x55, 0x55];
const COMCHECK_FRAME: [u8; 3] = [0x70, 0x02, 0x70];

const HEADER_LEN: usize = 3;

/// Rain8Net client over any byte stream; a serial port in production.
pub struct Rain8Client<P> {
    port: P,
}

impl Rain8Client<Box<dyn SerialPort>> {
    /// Open and configure the serial device the bus is attached to.
    pub fn open(device: &str, timeout: Duration) -> DeviceResult<Self> {
        debug!("open: device={} timeout={:?}", device, timeout);
        let port = serialport::new(device, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout)
            .open()
            .map_err(|source| DeviceError::Open {
                device: device.to_string(),
                source,
            })?;
        Ok(Self::new(port))
    }
}

impl<P: Read + Write> Rain8Client<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> P {
        self.port
    }

    fn send(&mut self, frame: &[u8]) -> DeviceResult<()> {
        trace!("send: {:02X?}", frame);
        self.port.write_all(frame)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive<const N: usize>(&mut self, target: &str) -> DeviceResult<[u8; N]> {
        let mut buf = [0u8; N];
        match self.port.read_exact(&mut buf) {
            Ok(()) => {
                trace!("receive: {:02X?}", buf);
                Ok(buf)
            }
            Err(e) if is_silence(&e) => Err(DeviceError::NoResponse {
                target: target.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Send a unit command and wait for its echo.
    fn unit_command(&mut self, unit: Unit, opcode: u8) -> DeviceResult<()> {
        let frame = [UNIT_PREFIX, unit.get(), opcode];
        self.send(&frame)?;
        let target = unit_target(unit);
        let echo: [u8; HEADER_LEN] = self.receive(&target)?;
        expect_frame(&target, &frame, &echo)
    }
}

impl<P: Read + Write> DeviceClient for Rain8Client<P> {
    fn zone_on(&mut self, unit: Unit, zone: Zone) -> DeviceResult<()> {
        self.unit_command(unit, ZONE_ON_BASE + zone.get())
    }

    fn zone_off(&mut self, unit: Unit, zone: Zone) -> DeviceResult<()> {
        self.unit_command(unit, ZONE_OFF_BASE + zone.get())
    }

    fn all_off(&mut self, unit: Unit) -> DeviceResult<()> {
        self.unit_command(unit, UNIT_ALL_OFF)
    }

    fn get_status(&mut self, unit: Unit) -> DeviceResult<StatusMask> {
        let frame = [UNIT_PREFIX, unit.get(), READ_STATUS];
        self.send(&frame)?;
        let target = unit_target(unit);
        let reply: [u8; HEADER_LEN] = self.receive(&target)?;
        expect_frame(&target, &frame[..2], &reply[..2])?;
        Ok(StatusMask::new(reply[2]))
    }

    fn global_all_off(&mut self) -> DeviceResult<()> {
        // broadcast: units do not acknowledge it
        self.send(&GLOBAL_ALL_OFF_FRAME)
    }

    fn com_check(&mut self) -> DeviceResult<()> {
        self.send(&COMCHECK_FRAME)?;
        let echo: [u8; HEADER_LEN] = self.receive("bus")?;
        expect_frame("bus", &COMCHECK_FRAME, &echo)
    }

    fn get_zone_timers(&mut self, unit: Unit) -> DeviceResult<TimerList> {
        let frame = [UNIT_PREFIX, unit.get(), READ_TIMERS];
        self.send(&frame)?;
        let target = unit_target(unit);
        let reply: [u8; HEADER_LEN + ZONE_COUNT] = self.receive(&target)?;
        expect_frame(&target, &frame, &reply[..HEADER_LEN])?;

        let mut values = [0u8; ZONE_COUNT];
        values.copy_from_slice(&reply[HEADER_LEN..]);
        TimerList::new(values).map_err(|e| DeviceError::BadResponse {
            target,
            detail: e.to_string(),
        })
    }

    fn set_zone_timers(&mut self, unit: Unit, timers: &TimerList) -> DeviceResult<()> {
        let header = [UNIT_PREFIX, unit.get(), WRITE_TIMERS];
        let mut frame = [0u8; HEADER_LEN + ZONE_COUNT];
        frame[..HEADER_LEN].copy_from_slice(&header);
        frame[HEADER_LEN..].copy_from_slice(timers.values());
        self.send(&frame)?;
        let target = unit_target(unit);
        let echo: [u8; HEADER_LEN] = self.receive(&target)?;
        expect_frame(&target, &header, &echo)
    }
}

fn unit_target(unit: Unit) -> String {
    format!("unit {unit}")
}

fn expect_frame(target: &str, expected: &[u8], got: &[u8]) -> DeviceResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(DeviceError::BadResponse {
            target: target.to_string(),
            detail: format!("expected {expected:02X?}, got {got:02X?}"),
        })
    }
}

/// Read errors that mean nobody answered in time.
fn is_silence(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::UnexpectedEof | io::ErrorKind::WouldBlock
    )
}
