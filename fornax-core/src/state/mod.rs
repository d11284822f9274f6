//! Oven state machine types

pub mod machine;

pub use machine::{OvenState, VentPhase};
