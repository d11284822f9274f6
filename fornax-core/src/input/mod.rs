//! Keypad input handling
//!
//! [`keys::Key`] is the decoded keypress vocabulary; [`entry::SetpointEntry`]
//! turns a sequence of keypresses into a completed bake setpoint.

pub mod entry;
pub mod keys;

pub use entry::{EntryPhase, SetpointEntry};
pub use keys::Key;
