//! Recurring weekday sets.
//!
//! Recurring rides repeat on a set of weekdays indexed the Israeli way:
//! 0 = Sunday through 5 = Friday. Saturday has no index and can never be
//! selected, so a day-limited recurring ride never runs on Saturday.
//! An empty set means "every day" (zero days selected is a convenience
//! default, not zero recurrence).

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Highest valid weekday index (Friday).
pub const MAX_WEEKDAY: u8 = 5;

/// Hebrew single-letter labels for Sunday..Friday.
const DAY_LETTERS: [&str; 6] = ["א", "ב", "ג", "ד", "ה", "ו"];

/// Error returned for a weekday index outside 0..=5.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday index {0}: must be 0 (Sunday) through 5 (Friday)")]
pub struct InvalidWeekday(pub u8);

/// A set of weekdays a recurring ride runs on.
///
/// Stored as a bitmask over indices 0..=5. Guaranteed by construction to
/// contain only valid indices.
///
/// # Examples
///
/// ```
/// use tremp_server::domain::WeekdaySet;
///
/// let days = WeekdaySet::from_indices(&[1, 3]).unwrap();
/// assert!(days.contains(1));
/// assert!(!days.contains(2));
///
/// // Saturday-ish indices are rejected outright
/// assert!(WeekdaySet::from_indices(&[6]).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set ("every day" for a recurring ride).
    pub fn empty() -> Self {
        Self(0)
    }

    /// Build a set from weekday indices.
    ///
    /// Duplicates are collapsed; any index above 5 is rejected.
    pub fn from_indices(indices: &[u8]) -> Result<Self, InvalidWeekday> {
        let mut bits = 0u8;
        for &idx in indices {
            if idx > MAX_WEEKDAY {
                return Err(InvalidWeekday(idx));
            }
            bits |= 1 << idx;
        }
        Ok(Self(bits))
    }

    /// Does the set contain the given weekday index?
    ///
    /// Indices above 5 (i.e. Saturday) are never contained.
    pub fn contains(&self, idx: u8) -> bool {
        idx <= MAX_WEEKDAY && self.0 & (1 << idx) != 0
    }

    /// True when no day is selected.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of selected days.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected weekday indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..=MAX_WEEKDAY).filter(|&i| self.contains(i)).collect()
    }

    /// Hebrew letter labels for the selected days, in week order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.indices()
            .into_iter()
            .map(|i| DAY_LETTERS[i as usize])
            .collect()
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekdaySet({:?})", self.indices())
    }
}

/// Weekday index of a date: 0 = Sunday .. 6 = Saturday.
///
/// Saturday's 6 exists only so callers can ask; it is never a member of
/// any `WeekdaySet`.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
