//! GPIO buzzer
//!
//! Single-line audible alarm for the end-of-bake signal.

use fornax_core::traits::AlarmOutput;

use crate::gpio::OutputPin;

/// Buzzer on a GPIO line
pub struct GpioBuzzer<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new buzzer, silent
    pub fn new(pin: P) -> Self {
        let mut buzzer = Self { pin, on: false };
        buzzer.set_on(false);
        buzzer
    }
}

impl<P: OutputPin> AlarmOutput for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
