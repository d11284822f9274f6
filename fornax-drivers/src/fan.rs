//! H-bridge circulation fan driver
//!
//! The fan is driven through two lines forming a tri-state bridge:
//! forward, reverse, or off. The two legs must never be high together.

use fornax_core::traits::{FanDirection, FanDriver};

use crate::gpio::OutputPin;

/// Two-line fan drive
pub struct HBridgeFan<P> {
    forward_line: P,
    reverse_line: P,
    direction: FanDirection,
}

impl<P: OutputPin> HBridgeFan<P> {
    /// Create a new fan driver, stopped
    pub fn new(forward_line: P, reverse_line: P) -> Self {
        let mut fan = Self {
            forward_line,
            reverse_line,
            direction: FanDirection::Off,
        };
        fan.set_direction(FanDirection::Off);
        fan
    }
}

impl<P: OutputPin> FanDriver for HBridgeFan<P> {
    fn set_direction(&mut self, direction: FanDirection) {
        // Drop the opposing leg before raising the other
        match direction {
            FanDirection::Off => {
                self.forward_line.set_low();
                self.reverse_line.set_low();
            }
            FanDirection::Forward => {
                self.reverse_line.set_low();
                self.forward_line.set_high();
            }
            FanDirection::Reverse => {
                self.forward_line.set_low();
                self.reverse_line.set_high();
            }
        }
        self.direction = direction;
    }

    fn direction(&self) -> FanDirection {
        self.direction
    }
}
