//! Per-cycle control logic
//!
//! [`controller::OvenController`] runs one decision cycle at a time,
//! consuming a keypress, a temperature sample, and the current instant,
//! and producing the actuator commands and display frame for that cycle.

pub mod controller;
pub mod countdown;
pub mod setpoint;

pub use controller::{CycleOutput, OvenController};
pub use countdown::Countdown;
pub use setpoint::Setpoint;
