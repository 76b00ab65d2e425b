//! The inclusive interval of numbers not yet ruled out as the target.
//!
//! Every miss bisects the board: a low guess raises the floor, a high
//! guess lowers the ceiling. While the target is undiscovered it always
//! sits inside the range, so narrowing can never invert the bounds.

use serde::{Deserialize, Serialize};

/// Inclusive candidate interval `[min, max]`, with `min <= max` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    min: u32,
    max: u32,
}

impl Range {
    /// Create a range. Panics if the bounds are inverted.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "Range bounds inverted: {min} > {max}");
        Self { min, max }
    }

    /// The full board for a mode: `[1, max]`.
    #[must_use]
    pub fn full(max: u32) -> Self {
        Self::new(1, max)
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Is `value` still a candidate?
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of candidates left.
    #[must_use]
    pub const fn span(self) -> u32 {
        self.max - self.min + 1
    }

    /// Rule out `value` and everything below it (the guess was low).
    ///
    /// Caller guarantees `value` is a non-target candidate, so the new
    /// floor cannot pass the ceiling.
    pub fn raise_min(&mut self, value: u32) {
        debug_assert!(self.contains(value) && value < self.max);
        self.min = value + 1;
    }

    /// Rule out `value` and everything above it (the guess was high).
    pub fn lower_max(&mut self, value: u32) {
        debug_assert!(self.contains(value) && value > self.min);
        self.max = value - 1;
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range() {
        let range = Range::full(100);
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 100);
        assert_eq!(range.span(), 100);
    }

    #[test]
    fn test_contains() {
        let range = Range::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_narrowing() {
        let mut range = Range::full(100);

        range.lower_max(70);
        assert_eq!(range, Range::new(1, 69));

        range.raise_min(10);
        assert_eq!(range, Range::new(11, 69));
        assert_eq!(range.span(), 59);
    }

    #[test]
    fn test_single_candidate() {
        let range = Range::new(42, 42);
        assert_eq!(range.span(), 1);
        assert!(range.contains(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Range::new(11, 69)), "11 - 69");
    }

    #[test]
    #[should_panic(expected = "Range bounds inverted")]
    fn test_inverted_bounds() {
        let _ = Range::new(5, 4);
    }
}
