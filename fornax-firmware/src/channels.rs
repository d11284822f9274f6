//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Keypresses queue so none are lost between control cycles;
//! everything else is latest-value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use fornax_core::input::keys::Key;
use fornax_core::render::DisplayFrame;
use fornax_core::traits::{FanDirection, HeatLevel};

/// Channel capacity for keypad events
const KEY_CHANNEL_SIZE: usize = 8;

/// Keypresses from the keypad scan task
pub static KEY_EVENTS: Channel<CriticalSectionRawMutex, Key, KEY_CHANNEL_SIZE> = Channel::new();

/// Latest chamber temperature in whole degrees Celsius
pub static TEMP_READING: Signal<CriticalSectionRawMutex, i16> = Signal::new();

/// Heating element bank command (updated by the control task)
pub static HEAT_CMD: Signal<CriticalSectionRawMutex, HeatLevel> = Signal::new();

/// Fan drive command (updated by the control task)
pub static FAN_CMD: Signal<CriticalSectionRawMutex, FanDirection> = Signal::new();

/// Buzzer line command (updated by the control task)
pub static ALARM_CMD: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Completed frame for the character display
pub static DISPLAY_FRAME: Signal<CriticalSectionRawMutex, DisplayFrame> = Signal::new();
