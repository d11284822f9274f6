//! Control cycle task
//!
//! Runs the oven controller at a fixed cadence: at most one queued
//! keypress, the latest temperature sample, and the current instant go
//! in; actuator commands and a display frame come out. Only commands
//! that changed are re-signaled - the hardware holds the rest.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use fornax_core::control::{CycleOutput, OvenController};

use crate::channels::{ALARM_CMD, DISPLAY_FRAME, FAN_CMD, HEAT_CMD, KEY_EVENTS, TEMP_READING};

/// Control cycle period
const CYCLE_PERIOD_MS: u64 = 100;

#[embassy_executor::task]
pub async fn control_task() {
    info!("Control task started");

    // Hold the first decision until a real temperature sample exists
    let mut temp_c = TEMP_READING.wait().await;
    info!("First temperature sample: {}", temp_c);

    let mut controller = OvenController::new();
    let mut last: Option<CycleOutput> = None;

    let mut ticker = Ticker::every(Duration::from_millis(CYCLE_PERIOD_MS));
    loop {
        if let Some(t) = TEMP_READING.try_take() {
            temp_c = t;
        }
        let key = KEY_EVENTS.try_receive().ok();
        let now_ms = Instant::now().as_millis() as u32;

        let out = controller.tick(key, temp_c, now_ms);

        match &last {
            Some(prev) => {
                if out.heat != prev.heat {
                    debug!("Heat level: {} elements", out.heat.element_count());
                    HEAT_CMD.signal(out.heat);
                }
                if out.fan != prev.fan {
                    FAN_CMD.signal(out.fan);
                }
                if out.alarm != prev.alarm {
                    ALARM_CMD.signal(out.alarm);
                }
                if out.display != prev.display {
                    DISPLAY_FRAME.signal(out.display.clone());
                }
            }
            None => {
                HEAT_CMD.signal(out.heat);
                FAN_CMD.signal(out.fan);
                ALARM_CMD.signal(out.alarm);
                DISPLAY_FRAME.signal(out.display.clone());
            }
        }
        last = Some(out);

        ticker.next().await;
    }
}
