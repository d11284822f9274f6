//! Board-agnostic control logic for the Fornax bakery oven
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (heater bank, fan, sensor, keypad, display)
//! - The oven state machine and its per-cycle decision logic
//! - Setpoint entry (keypad digit accumulation)
//! - Bake countdown timer
//! - Display frame formatting

#![no_std]
#![deny(unsafe_code)]

pub mod control;
pub mod input;
pub mod render;
pub mod state;
pub mod traits;
