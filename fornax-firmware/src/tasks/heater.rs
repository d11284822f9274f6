//! Heating element bank task

use defmt::*;

use fornax_core::traits::HeaterBank;
use fornax_drivers::heater::GpioHeaterBank;

use crate::channels::HEAT_CMD;
use crate::hw::PinOut;

#[embassy_executor::task]
pub async fn heater_task(mut bank: GpioHeaterBank<PinOut>) {
    info!("Heater task started");

    loop {
        let level = HEAT_CMD.wait().await;
        bank.set_level(level);
    }
}
