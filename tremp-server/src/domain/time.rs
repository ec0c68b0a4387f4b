//! Time-of-day handling for the transport feed.
//!
//! Rides and bus departures carry times as "HH:MM" strings. This module
//! provides a validated time-of-day type and an inclusive filter window.
//! Everything on the board happens within one calendar day, so there is
//! no overnight rollover to worry about: the date dimension lives on the
//! ride itself, and bus departures take whichever date is selected.

use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// Parsed from the fixed-width "HH:MM" format the store and the bus
/// schedules use. Ordering on `DayTime` agrees with lexicographic ordering
/// on the zero-padded strings, which is what the feed sort relies on.
///
/// # Examples
///
/// ```
/// use tremp_server::domain::DayTime;
///
/// let t = DayTime::parse("08:15").unwrap();
/// assert_eq!(t.to_string(), "08:15");
/// assert!(t < DayTime::parse("09:00").unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTime(NaiveTime);

impl DayTime {
    /// Create a DayTime from hour and minute components.
    ///
    /// Returns an error if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("hour must be 0-23 and minute 0-59"))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// The input must be exactly five characters with a colon at position
    /// two. Anything else is rejected; malformed times are a caller bug,
    /// never silently tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use tremp_server::domain::DayTime;
    ///
    /// assert!(DayTime::parse("00:00").is_ok());
    /// assert!(DayTime::parse("23:59").is_ok());
    ///
    /// assert!(DayTime::parse("815").is_err());
    /// assert!(DayTime::parse("8:15").is_err());
    /// assert!(DayTime::parse("24:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying NaiveTime.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// Minutes from midnight (0-1439).
    pub fn minutes_from_midnight(&self) -> i64 {
        self.hour() as i64 * 60 + self.minute() as i64
    }

    /// Signed minutes from `now` until this time, within one day.
    ///
    /// Negative when the time has already passed. Used for the
    /// "leaving in N minutes" badge on bus departures.
    pub fn minutes_after(&self, now: DayTime) -> i64 {
        self.minutes_from_midnight() - now.minutes_from_midnight()
    }
}

impl Ord for DayTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for DayTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// An inclusive time-of-day window for filtering the feed.
///
/// `start > end` is rejected at construction: an inverted window is a
/// caller error, and failing fast beats silently returning nothing.
///
/// # Examples
///
/// ```
/// use tremp_server::domain::{DayTime, TimeRange};
///
/// let range = TimeRange::new(
///     DayTime::parse("07:00").unwrap(),
///     DayTime::parse("23:59").unwrap(),
/// ).unwrap();
///
/// assert!(range.contains(DayTime::parse("07:00").unwrap()));
/// assert!(range.contains(DayTime::parse("12:30").unwrap()));
/// assert!(!range.contains(DayTime::parse("06:59").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DayTime,
    end: DayTime,
}

impl TimeRange {
    /// Create a window from `start` to `end`, both inclusive.
    pub fn new(start: DayTime, end: DayTime) -> Result<Self, TimeError> {
        if start > end {
            return Err(TimeError::new("window start must not be after end"));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two "HH:MM" strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeError> {
        Self::new(DayTime::parse(start)?, DayTime::parse(end)?)
    }

    /// The whole day, 00:00 through 23:59.
    pub fn full_day() -> Self {
        Self {
            start: DayTime(NaiveTime::from_hms_opt(0, 0, 0).unwrap()),
            end: DayTime(NaiveTime::from_hms_opt(23, 59, 0).unwrap()),
        }
    }

    /// Returns the start of the window.
    pub fn start(&self) -> DayTime {
        self.start
    }

    /// Returns the end of the window.
    pub fn end(&self) -> DayTime {
        self.end
    }

    /// Is the given time inside the window (inclusive on both ends)?
    pub fn contains(&self, time: DayTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
