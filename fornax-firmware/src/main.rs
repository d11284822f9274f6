//! Fornax - Bakery Oven Controller Firmware
//!
//! Main firmware binary for RP2040-based oven controllers.
//!
//! Named after the Latin "fornax" (baking oven) - the Roman goddess
//! Fornax watched over bread as it baked.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use fornax_drivers::alarm::GpioBuzzer;
use fornax_drivers::display::Hd44780;
use fornax_drivers::fan::HBridgeFan;
use fornax_drivers::heater::GpioHeaterBank;
use fornax_drivers::keypad::MatrixKeypad;
use fornax_drivers::sensor::TrioSensor;

use crate::hw::{OvenAdc, PinIn, PinOut};

mod channels;
mod hw;
mod tasks;

/// ADC reference voltage in millivolts
const ADC_VREF_MV: u16 = 3300;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fornax firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Heating element bank, priority order 1 -> 2 -> 3
    let bank = GpioHeaterBank::new(
        PinOut(Output::new(p.PIN_2, Level::Low)),
        PinOut(Output::new(p.PIN_3, Level::Low)),
        PinOut(Output::new(p.PIN_4, Level::Low)),
    );

    // Fan bridge legs
    let fan = HBridgeFan::new(
        PinOut(Output::new(p.PIN_6, Level::Low)),
        PinOut(Output::new(p.PIN_7, Level::Low)),
    );

    // End-of-bake buzzer
    let buzzer = GpioBuzzer::new(PinOut(Output::new(p.PIN_8, Level::Low)));

    // Keypad matrix: rows strobed high, columns read against pull-downs
    let keypad = MatrixKeypad::new(
        [
            PinOut(Output::new(p.PIN_10, Level::Low)),
            PinOut(Output::new(p.PIN_11, Level::Low)),
            PinOut(Output::new(p.PIN_12, Level::Low)),
            PinOut(Output::new(p.PIN_13, Level::Low)),
        ],
        [
            PinIn(Input::new(p.PIN_14, Pull::Down)),
            PinIn(Input::new(p.PIN_15, Pull::Down)),
            PinIn(Input::new(p.PIN_16, Pull::Down)),
            PinIn(Input::new(p.PIN_17, Pull::Down)),
        ],
    );

    // Three transducer channels on the on-chip ADC
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let adc_channels = [
        AdcChannel::new_pin(p.PIN_26, Pull::None),
        AdcChannel::new_pin(p.PIN_27, Pull::None),
        AdcChannel::new_pin(p.PIN_28, Pull::None),
    ];
    let sensor = TrioSensor::new(OvenAdc::new(adc, adc_channels), ADC_VREF_MV);

    // Character display, 4-bit interface
    let lcd = Hd44780::new(
        PinOut(Output::new(p.PIN_18, Level::Low)),
        PinOut(Output::new(p.PIN_19, Level::Low)),
        [
            PinOut(Output::new(p.PIN_20, Level::Low)),
            PinOut(Output::new(p.PIN_21, Level::Low)),
            PinOut(Output::new(p.PIN_22, Level::Low)),
            PinOut(Output::new(p.PIN_23, Level::Low)),
        ],
        Delay,
    );

    unwrap!(spawner.spawn(tasks::keypad::keypad_task(keypad)));
    unwrap!(spawner.spawn(tasks::sensor::sensor_task(sensor)));
    unwrap!(spawner.spawn(tasks::heater::heater_task(bank)));
    unwrap!(spawner.spawn(tasks::fan::fan_task(fan)));
    unwrap!(spawner.spawn(tasks::alarm::alarm_task(buzzer)));
    unwrap!(spawner.spawn(tasks::display::display_task(lcd)));
    unwrap!(spawner.spawn(tasks::controller::control_task()));

    info!("All tasks running");
}
