//! Course progress arithmetic.
//!
//! Progress is a whole percentage derived from how many of a course's modules
//! are complete. The same rounding is reused for quiz scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer completion percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    /// Builds a progress value, clamping anything above 100.
    #[must_use]
    pub fn new(percent: u32) -> Self {
        let clamped = percent.min(100);
        // clamped to 100 above, always fits
        Self(u8::try_from(clamped).unwrap_or(100))
    }

    /// Progress for `done` completed modules out of `total`.
    ///
    /// A course with no modules has zero progress. Once every module is done
    /// the result is exactly 100, whatever the rounding of the ratio would say.
    #[must_use]
    pub fn from_counts(done: usize, total: usize) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        if done >= total {
            return Self::COMPLETE;
        }
        Self::new(round_percent(done, total))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl From<u32> for Progress {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for u32 {
    fn from(value: Progress) -> Self {
        u32::from(value.0)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// `round(100 * part / whole)` with halves rounded away from zero.
///
/// Callers guarantee `whole > 0`.
pub(crate) fn round_percent(part: usize, whole: usize) -> u32 {
    let part = part as u128;
    let whole = whole as u128;
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_modules_is_zero_progress() {
        assert_eq!(Progress::from_counts(0, 0), Progress::ZERO);
        assert_eq!(Progress::from_counts(3, 0), Progress::ZERO);
    }

    #[test]
    fn quarters_round_exactly() {
        assert_eq!(Progress::from_counts(1, 4).value(), 25);
        assert_eq!(Progress::from_counts(2, 4).value(), 50);
        assert_eq!(Progress::from_counts(3, 4).value(), 75);
        assert_eq!(Progress::from_counts(4, 4).value(), 100);
    }

    #[test]
    fn thirds_round_to_nearest() {
        assert_eq!(Progress::from_counts(1, 3).value(), 33);
        assert_eq!(Progress::from_counts(2, 3).value(), 67);
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 1/8 = 12.5%
        assert_eq!(Progress::from_counts(1, 8).value(), 13);
        // 1/200 = 0.5%
        assert_eq!(Progress::from_counts(1, 200).value(), 1);
    }

    #[test]
    fn large_courses_follow_plain_rounding() {
        // plain rounding can reach 100 before every module is done
        assert_eq!(Progress::from_counts(199, 200).value(), 100);
        assert_eq!(Progress::from_counts(998, 1000).value(), 100);
        assert_eq!(Progress::from_counts(989, 1000).value(), 99);
    }

    #[test]
    fn full_completion_is_exactly_hundred() {
        for total in 1..=50 {
            assert_eq!(Progress::from_counts(total, total), Progress::COMPLETE);
        }
    }

    #[test]
    fn progress_is_bounded() {
        for total in 0..=20 {
            for done in 0..=25 {
                let p = Progress::from_counts(done, total).value();
                assert!(p <= 100, "{done}/{total} gave {p}");
            }
        }
    }

    #[test]
    fn deserialize_clamps_out_of_range_values() {
        let p: Progress = serde_json::from_str("250").unwrap();
        assert_eq!(p, Progress::COMPLETE);
        assert_eq!(serde_json::to_string(&Progress::new(40)).unwrap(), "40");
    }
}
