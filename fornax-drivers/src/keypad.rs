//! 4x4 matrix keypad scanner
//!
//! Rows are driven high one at a time while the columns are sampled; a
//! high column identifies the key at that row/column crossing. Keys are
//! reported on the press edge only, so holding a key yields a single
//! event per press.

use fornax_core::input::keys::Key;
use fornax_core::traits::KeypadDriver;

use crate::gpio::{InputPin, OutputPin};

/// Scanned rows
pub const KEYPAD_ROWS: usize = 4;

/// Sampled columns
pub const KEYPAD_COLS: usize = 4;

/// Key legends at each row/column crossing
pub const KEYMAP: [[char; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Matrix keypad over row outputs and column inputs
pub struct MatrixKeypad<R, C> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
    /// Key seen down on the previous scan, for press-edge detection
    held: Option<Key>,
}

impl<R: OutputPin, C: InputPin> MatrixKeypad<R, C> {
    /// Create a new scanner; all rows idle low
    pub fn new(rows: [R; KEYPAD_ROWS], cols: [C; KEYPAD_COLS]) -> Self {
        let mut keypad = Self {
            rows,
            cols,
            held: None,
        };
        for row in &mut keypad.rows {
            row.set_low();
        }
        keypad
    }

    /// Scan the whole matrix once, returning the first key found down
    fn scan(&mut self) -> Option<Key> {
        let mut found = None;

        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_high();
            for (c, col) in self.cols.iter_mut().enumerate() {
                if col.is_high() && found.is_none() {
                    found = Key::from_char(KEYMAP[r][c]);
                }
            }
            row.set_low();
        }

        found
    }
}

impl<R: OutputPin, C: InputPin> KeypadDriver for MatrixKeypad<R, C> {
    fn poll_key(&mut self) -> Option<Key> {
        let current = self.scan();
        let pressed = match (self.held, current) {
            (None, Some(key)) => Some(key),
            _ => None,
        };
        self.held = current;
        pressed
    }
}
