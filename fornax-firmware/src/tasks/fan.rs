//! Circulation fan task

use defmt::*;

use fornax_core::traits::FanDriver;
use fornax_drivers::fan::HBridgeFan;

use crate::channels::FAN_CMD;
use crate::hw::PinOut;

#[embassy_executor::task]
pub async fn fan_task(mut fan: HBridgeFan<PinOut>) {
    info!("Fan task started");

    loop {
        let direction = FAN_CMD.wait().await;
        debug!("Fan: {}", direction);
        fan.set_direction(direction);
    }
}
