//! Score value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A score between 0.0 and 100.0 inclusive.
///
/// Construction clamps to the valid range; out-of-range inputs are a
/// normalization concern, not an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0.0);

    /// Maximum score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Score, clamping to [0, 100].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns this score rounded to 2 decimal places
    /// (half away from zero).
    pub fn rounded2(&self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    /// Total ordering over the underlying float.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_range() {
        assert_eq!(Score::new(-5.0).value(), 0.0);
        assert_eq!(Score::new(42.5).value(), 42.5);
        assert_eq!(Score::new(150.0).value(), 100.0);
    }

    #[test]
    fn rounded2_rounds_half_away_from_zero() {
        assert_eq!(Score::new(36.005).rounded2().value(), 36.01);
        assert_eq!(Score::new(36.004).rounded2().value(), 36.0);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Score::new(75.5)).unwrap();
        assert_eq!(json, "75.5");
    }
}
