//! Temperature sampling task

use defmt::*;
use embassy_time::{Duration, Ticker};

use fornax_core::traits::TemperatureSensor;
use fornax_drivers::sensor::TrioSensor;

use crate::channels::TEMP_READING;
use crate::hw::OvenAdc;

/// Sample period
const SAMPLE_PERIOD_MS: u64 = 250;

#[embassy_executor::task]
pub async fn sensor_task(mut sensor: TrioSensor<OvenAdc>) {
    info!("Sensor task started");

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    loop {
        match sensor.read_celsius() {
            Ok(temp_c) => {
                trace!("Temperature: {}", temp_c);
                TEMP_READING.signal(temp_c);
            }
            // The controller keeps deciding on its last good sample
            Err(_) => warn!("Temperature sample failed"),
        }
        ticker.next().await;
    }
}
