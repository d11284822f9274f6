//! HD44780 character display, 4-bit GPIO interface
//!
//! Drives a 2x16 character LCD over six lines: register select, enable,
//! and the upper data nibble. Timing comes from an `embedded-hal` delay
//! provider; writes are fire-and-forget (the busy flag is never read, a
//! worst-case delay follows every transfer instead).

use embedded_hal::delay::DelayNs;

use fornax_core::render::DISPLAY_COLS;
use fornax_core::traits::DisplayDriver;

use crate::gpio::OutputPin;

// HD44780 command set (the subset this display uses)
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x06; // increment, no shift
const CMD_DISPLAY_ON: u8 = 0x0C; // display on, cursor off
const CMD_FUNCTION_SET: u8 = 0x28; // 4-bit, 2 lines, 5x8 font
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of each row's first column
const ROW_ADDR: [u8; 2] = [0x00, 0x40];

/// HD44780 over GPIO in 4-bit mode
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// Data lines D4..D7, least significant first
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Create a driver over raw pins; call [`init`](Self::init) before use
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
        }
    }

    /// Run the controller's 4-bit initialization sequence
    pub fn init(&mut self) {
        // Power-on settle time
        self.delay.delay_ms(15);
        self.rs.set_low();

        // Three 8-bit function-set strobes force a known interface
        // state, then the fourth drops the controller into 4-bit mode
        self.write_nibble(0x03);
        self.delay.delay_ms(5);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x02);
        self.delay.delay_us(150);

        self.command(CMD_FUNCTION_SET);
        self.command(CMD_DISPLAY_ON);
        self.command(CMD_ENTRY_MODE);
        self.command(CMD_CLEAR);
        self.delay.delay_ms(2);
    }

    /// Latch one nibble onto D4..D7
    fn write_nibble(&mut self, nibble: u8) {
        for (bit, line) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                line.set_high();
            } else {
                line.set_low();
            }
        }

        self.en.set_high();
        self.delay.delay_us(1);
        self.en.set_low();
        self.delay.delay_us(1);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        // Worst-case instruction time in lieu of busy-flag polling
        self.delay.delay_us(50);
    }

    fn command(&mut self, cmd: u8) {
        self.rs.set_low();
        self.write_byte(cmd);
    }

    fn write_char(&mut self, c: u8) {
        self.rs.set_high();
        self.write_byte(c);
    }
}

impl<P: OutputPin, D: DelayNs> DisplayDriver for Hd44780<P, D> {
    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        self.delay.delay_ms(2);
    }

    fn write_line(&mut self, row: u8, text: &str) {
        let addr = match ROW_ADDR.get(row as usize) {
            Some(&addr) => addr,
            None => return,
        };
        self.command(CMD_SET_DDRAM | addr);

        let mut written = 0;
        for c in text.bytes().take(DISPLAY_COLS) {
            self.write_char(c);
            written += 1;
        }
        // Pad the remainder so stale characters never linger
        for _ in written..DISPLAY_COLS {
            self.write_char(b' ');
        }
    }
}
