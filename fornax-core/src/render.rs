//! Display frame formatting
//!
//! Builds the two-line status view for the character display. The
//! display has 2 rows of 16 characters; anything longer is clipped the
//! way the hardware would clip it.
//!
//! Formatting is side-effect free - the firmware display task pushes
//! completed frames to the LCD.

use core::fmt::Write;

use heapless::String;

use crate::input::entry::EntryPhase;

/// Visible columns per row
pub const DISPLAY_COLS: usize = 16;

/// Display rows
pub const DISPLAY_ROWS: usize = 2;

/// A complete two-line frame ready to be sent to the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    lines: [String<DISPLAY_COLS>; 2],
}

impl DisplayFrame {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
        }
    }

    /// Set text at a row, clipping at the visible width
    pub fn set_line(&mut self, row: u8, text: &str) {
        if let Some(line) = self.lines.get_mut(row as usize) {
            line.clear();
            for c in text.chars().take(DISPLAY_COLS) {
                let _ = line.push(c);
            }
        }
    }

    /// Get a line of text
    pub fn line(&self, row: u8) -> &str {
        self.lines
            .get(row as usize)
            .map(|l| l.as_str())
            .unwrap_or("")
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the setpoint entry view: prompt on top, pending digits below
pub fn entry_frame(phase: EntryPhase, pending: &str) -> DisplayFrame {
    let mut frame = DisplayFrame::new();
    let prompt = match phase {
        EntryPhase::Temperature => "Set temperature",
        EntryPhase::Duration => "Set bake time",
    };
    frame.set_line(0, prompt);
    frame.set_line(1, pending);
    frame
}

/// Build the bake status view: state name on top, readings below
pub fn status_frame(label: &str, temp_c: i16, remaining_s: u16) -> DisplayFrame {
    let mut frame = DisplayFrame::new();
    frame.set_line(0, label);

    // Widest case is "Temp:-32768 Time:65535" (22 chars); formatted in
    // full here, clipped to the visible columns by set_line
    let mut status: String<24> = String::new();
    let _ = write!(status, "Temp:{} Time:{}", temp_c, remaining_s);
    frame.set_line(1, &status);
    frame
}
