//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific implementations.

pub mod alarm;
pub mod display;
pub mod fan;
pub mod heater;
pub mod keypad;

pub use alarm::AlarmOutput;
pub use display::DisplayDriver;
pub use fan::{FanDirection, FanDriver};
pub use heater::{HeatLevel, HeaterBank, SensorError, TemperatureSensor};
pub use keypad::KeypadDriver;
