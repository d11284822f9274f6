//! Keypad trait

use crate::input::keys::Key;

/// Trait for the 16-key matrix keypad
///
/// Implementations scan the matrix and report each keypress exactly once
/// (press edge, not level).
pub trait KeypadDriver {
    /// Poll for a new keypress
    ///
    /// Returns `Some(key)` on the scan where a key is first seen down,
    /// `None` otherwise.
    fn poll_key(&mut self) -> Option<Key>;
}
