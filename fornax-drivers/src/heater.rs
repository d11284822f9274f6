//! GPIO heating element bank
//!
//! Drives the oven's three element lines from a discrete power level.
//! Elements engage in priority order: a level of two means elements 1
//! and 2 are on and element 3 is off, never any other combination.

use fornax_core::traits::{HeatLevel, HeaterBank};

use crate::gpio::OutputPin;

/// Number of heating elements in the bank
pub const ELEMENT_COUNT: usize = 3;

/// Heating element bank over three GPIO lines
pub struct GpioHeaterBank<P> {
    elements: [P; ELEMENT_COUNT],
    level: HeatLevel,
}

impl<P: OutputPin> GpioHeaterBank<P> {
    /// Create a new bank with all elements off
    ///
    /// Pins are given in priority order.
    pub fn new(element1: P, element2: P, element3: P) -> Self {
        let mut bank = Self {
            elements: [element1, element2, element3],
            level: HeatLevel::Off,
        };
        bank.set_level(HeatLevel::Off);
        bank
    }
}

impl<P: OutputPin> HeaterBank for GpioHeaterBank<P> {
    fn set_level(&mut self, level: HeatLevel) {
        let active = level.element_count() as usize;

        for (index, element) in self.elements.iter_mut().enumerate() {
            if index < active {
                element.set_high();
            } else {
                element.set_low();
            }
        }
        self.level = level;
    }

    fn level(&self) -> HeatLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn element_states<P: OutputPin>(bank: &GpioHeaterBank<P>) -> [bool; 3] {
        [
            bank.elements[0].is_set_high(),
            bank.elements[1].is_set_high(),
            bank.elements[2].is_set_high(),
        ]
    }

    #[test]
    fn test_starts_off() {
        let bank = GpioHeaterBank::new(MockPin::new(), MockPin::new(), MockPin::new());
        assert_eq!(bank.level(), HeatLevel::Off);
        assert_eq!(element_states(&bank), [false, false, false]);
    }

    #[test]
    fn test_priority_ordering() {
        let mut bank = GpioHeaterBank::new(MockPin::new(), MockPin::new(), MockPin::new());

        bank.set_level(HeatLevel::One);
        assert_eq!(element_states(&bank), [true, false, false]);

        bank.set_level(HeatLevel::Two);
        assert_eq!(element_states(&bank), [true, true, false]);

        bank.set_level(HeatLevel::Three);
        assert_eq!(element_states(&bank), [true, true, true]);
    }

    #[test]
    fn test_stepping_down_releases_in_order() {
        let mut bank = GpioHeaterBank::new(MockPin::new(), MockPin::new(), MockPin::new());

        bank.set_level(HeatLevel::Three);
        bank.set_level(HeatLevel::One);
        assert_eq!(element_states(&bank), [true, false, false]);

        bank.set_level(HeatLevel::Off);
        assert_eq!(element_states(&bank), [false, false, false]);
        assert_eq!(bank.level(), HeatLevel::Off);
    }
}
