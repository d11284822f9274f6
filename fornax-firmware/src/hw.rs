//! Adapters from RP2040 peripherals to the driver traits

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};

use fornax_drivers::gpio::{InputPin, OutputPin};
use fornax_drivers::sensor::{AdcBank, RAW_CHANNELS};

/// Push-pull output adapter
pub struct PinOut(pub Output<'static>);

impl OutputPin for PinOut {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input adapter
pub struct PinIn(pub Input<'static>);

impl InputPin for PinIn {
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

/// The three transducer channels behind the on-chip ADC
pub struct OvenAdc {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; RAW_CHANNELS],
}

impl OvenAdc {
    pub fn new(adc: Adc<'static, Blocking>, channels: [Channel<'static>; RAW_CHANNELS]) -> Self {
        Self { adc, channels }
    }
}

impl AdcBank for OvenAdc {
    fn read(&mut self, channel: usize) -> Result<u16, ()> {
        match self.channels.get_mut(channel) {
            Some(ch) => self.adc.blocking_read(ch).map_err(|_| ()),
            None => Err(()),
        }
    }
}
