//! Buzzer task

use defmt::*;

use fornax_core::traits::AlarmOutput;
use fornax_drivers::alarm::GpioBuzzer;

use crate::channels::ALARM_CMD;
use crate::hw::PinOut;

#[embassy_executor::task]
pub async fn alarm_task(mut buzzer: GpioBuzzer<PinOut>) {
    info!("Alarm task started");

    loop {
        let on = ALARM_CMD.wait().await;
        buzzer.set_on(on);
    }
}
