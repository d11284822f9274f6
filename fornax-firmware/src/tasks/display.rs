//! Character display task

use defmt::*;
use embassy_time::Delay;

use fornax_core::traits::DisplayDriver;
use fornax_drivers::display::Hd44780;

use crate::channels::DISPLAY_FRAME;
use crate::hw::PinOut;

#[embassy_executor::task]
pub async fn display_task(mut lcd: Hd44780<PinOut, Delay>) {
    lcd.init();
    info!("Display task started");

    loop {
        let frame = DISPLAY_FRAME.wait().await;
        // Full-row writes overwrite everything; no clear, no flicker
        lcd.write_line(0, frame.line(0));
        lcd.write_line(1, frame.line(1));
    }
}
