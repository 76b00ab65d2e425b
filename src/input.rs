//! Host-side keypad buffer.
//!
//! Raw key events and on-screen keypad presses map to the same three
//! operations: push a digit, backspace, clear. The buffer enforces only
//! what the keypad enforced — digits only, capped at the mode's digit
//! length, no leading zero — and the engine never sees it; hosts submit
//! its text through [`GameEngine::submit_buffer`].
//!
//! [`GameEngine::submit_buffer`]: crate::rules::GameEngine::submit_buffer

use serde::{Deserialize, Serialize};

use crate::rules::Mode;

/// Pending-guess digit buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessBuffer {
    digits: String,
    limit: usize,
}

impl GuessBuffer {
    /// A buffer sized for the mode (3 digits for 1-100, 4 for 1-1000).
    #[must_use]
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            digits: String::new(),
            limit: mode.digit_limit(),
        }
    }

    /// Append a keypad digit.
    ///
    /// Ignored (returning `false`) for non-digits, when the buffer is
    /// full, and for a leading `0` on an empty buffer.
    pub fn push_digit(&mut self, key: char) -> bool {
        if !key.is_ascii_digit() || self.digits.len() >= self.limit {
            return false;
        }
        if self.digits.is_empty() && key == '0' {
            return false;
        }
        self.digits.push(key);
        true
    }

    /// Remove the last digit, if any.
    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    /// Empty the buffer (the CLR key).
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Current contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Is the buffer empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits typed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }
}
