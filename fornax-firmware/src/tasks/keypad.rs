//! Keypad scan task

use defmt::*;
use embassy_time::{Duration, Ticker};

use fornax_core::traits::KeypadDriver;
use fornax_drivers::keypad::MatrixKeypad;

use crate::channels::KEY_EVENTS;
use crate::hw::{PinIn, PinOut};

/// Scan period; comfortably shorter than any human keypress
const SCAN_PERIOD_MS: u64 = 20;

#[embassy_executor::task]
pub async fn keypad_task(mut keypad: MatrixKeypad<PinOut, PinIn>) {
    info!("Keypad task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_PERIOD_MS));
    loop {
        if let Some(key) = keypad.poll_key() {
            debug!("Key pressed: {}", key.as_char());
            KEY_EVENTS.send(key).await;
        }
        ticker.next().await;
    }
}
