//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in fornax-core for the oven's peripherals:
//!
//! - Heating element bank (three GPIO lines, priority ordered)
//! - Circulation fan (two-line H-bridge drive)
//! - End-of-bake buzzer
//! - 4x4 matrix keypad scanner
//! - Three-channel averaging temperature sensor
//! - HD44780 character display (4-bit GPIO interface)

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod display;
pub mod fan;
pub mod gpio;
pub mod heater;
pub mod keypad;
pub mod sensor;
