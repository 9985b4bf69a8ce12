//! Digit-entry buffer for composing a timer duration

use crate::format::digits_to_millis;

/// Maximum number of digits a duration entry may hold (`HHMMSS`).
pub const MAX_ENTRY_DIGITS: usize = 6;

/// Accumulates the digits a user types when setting a new duration.
///
/// Mirrors the entry-screen rules: a leading zero on an empty buffer is
/// ignored, the buffer caps at six digits, and removal on an empty buffer
/// is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DigitBuffer {
    digits: String,
}

impl DigitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one typed character. Non-digits, overflow past six digits,
    /// and a leading `'0'` are silently ignored.
    pub fn push(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.digits.len() >= MAX_ENTRY_DIGITS {
            return;
        }
        if self.digits.is_empty() && c == '0' {
            return;
        }
        self.digits.push(c);
    }

    /// Remove the most recently typed digit, if any.
    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Interpret the current entry as milliseconds.
    pub fn as_millis(&self) -> u64 {
        // The buffer only ever holds up to six ASCII digits.
        digits_to_millis(&self.digits).unwrap_or(0)
    }
}
