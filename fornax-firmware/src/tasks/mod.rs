//! Embassy tasks
//!
//! One task per peripheral plus the control cycle task. Peripheral
//! tasks are thin: they apply whatever the control task last commanded.

pub mod alarm;
pub mod controller;
pub mod display;
pub mod fan;
pub mod heater;
pub mod keypad;
pub mod sensor;
