//! Ride posting types.
//!
//! A `Ride` is a user-submitted car-pool offer or request. Rides come from
//! the hosted store already validated into these types; anything malformed
//! is rejected at the conversion boundary, so code holding a `Ride` can
//! trust it.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

use super::days::{WeekdaySet, weekday_index};
use super::time::DayTime;

/// Server-assigned ride identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RideId(String);

impl RideId {
    /// Wrap a store-assigned id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identity-provider user id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned for an unknown ride kind string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ride kind {0:?}: expected \"offer\" or \"request\"")]
pub struct InvalidRideKind(pub String);

/// Whether the poster is driving or looking for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RideKind {
    /// The poster is driving and offering seats.
    Offer,
    /// The poster needs a ride.
    Request,
}

impl RideKind {
    /// Parse the wire representation ("offer" | "request").
    pub fn parse(s: &str) -> Result<Self, InvalidRideKind> {
        match s {
            "offer" => Ok(Self::Offer),
            "request" => Ok(Self::Request),
            other => Err(InvalidRideKind(other.to_string())),
        }
    }

    /// Wire representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for RideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a ride runs.
///
/// The store models this as an `isRecurring` flag plus a weekday list;
/// here it is an explicit sum so the feed builder can't forget a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Runs once, on the ride's date.
    OneOff,
    /// Repeats weekly on the given days; an empty set means every day.
    Weekly(WeekdaySet),
}

impl Recurrence {
    /// True for any weekly recurrence.
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Weekly(_))
    }
}

/// A user-submitted car-pool posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    /// Store-assigned identity.
    pub id: RideId,
    /// Offer or request.
    pub kind: RideKind,
    /// Departure place.
    pub origin: String,
    /// Arrival place.
    pub destination: String,
    /// The calendar day of the ride (base day for recurring rides).
    pub date: NaiveDate,
    /// Departure time of day.
    pub time: DayTime,
    /// Seat count (offered or needed).
    pub seats: u32,
    /// Display name of the poster.
    pub driver_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// One-off or weekly schedule.
    pub recurrence: Recurrence,
    /// Identity of the posting user; only the owner may delete.
    pub owner: UserId,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
}

impl Ride {
    /// Does this ride run on the given date?
    ///
    /// A ride runs on its exact date, and a recurring ride additionally
    /// runs on every date whose weekday is in its day set (every date at
    /// all when the set is empty).
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        if self.date == date {
            return true;
        }
        match self.recurrence {
            Recurrence::OneOff => false,
            Recurrence::Weekly(days) => days.is_empty() || days.contains(weekday_index(date)),
        }
    }

    /// Is the given user the owner of this posting?
    ///
    /// `None` (no signed-in identity) never owns anything. This is a
    /// client-side convenience check; the store enforces the real rule.
    pub fn is_owned_by(&self, user: Option<&UserId>) -> bool {
        user.is_some_and(|u| u == &self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ride(on: NaiveDate, recurrence: Recurrence) -> Ride {
        Ride {
            id: RideId::new("r1"),
            kind: RideKind::Offer,
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            date: on,
            time: DayTime::parse("08:00").unwrap(),
            seats: 3,
            driver_name: "דוד".to_string(),
            phone: "050-1234567".to_string(),
            notes: None,
            recurrence,
            owner: UserId::new("u1"),
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn ride_kind_parse() {
        assert_eq!(RideKind::parse("offer").unwrap(), RideKind::Offer);
        assert_eq!(RideKind::parse("request").unwrap(), RideKind::Request);
        assert!(RideKind::parse("Offer").is_err());
        assert!(RideKind::parse("").is_err());
    }

    #[test]
    fn one_off_runs_only_on_its_date() {
        let r = ride(date(2024, 1, 1), Recurrence::OneOff);
        assert!(r.runs_on(date(2024, 1, 1)));
        assert!(!r.runs_on(date(2024, 1, 2)));
        assert!(!r.runs_on(date(2024, 1, 8)));
    }

    #[test]
    fn empty_weekly_set_runs_every_day() {
        let r = ride(date(2024, 1, 1), Recurrence::Weekly(WeekdaySet::empty()));
        // Every weekday, including Saturday
        for day in 1..=7 {
            assert!(r.runs_on(date(2024, 1, day)));
        }
    }

    #[test]
    fn day_limited_weekly_runs_on_selected_days() {
        // Monday (1) and Wednesday (3)
        let days = WeekdaySet::from_indices(&[1, 3]).unwrap();
        let r = ride(date(2024, 1, 1), Recurrence::Weekly(days));

        // 2024-01-08 is a Monday, 2024-01-10 a Wednesday
        assert!(r.runs_on(date(2024, 1, 8)));
        assert!(r.runs_on(date(2024, 1, 10)));
        // 2024-01-09 is a Tuesday
        assert!(!r.runs_on(date(2024, 1, 9)));
        // 2024-01-13 is a Saturday: never in a day set
        assert!(!r.runs_on(date(2024, 1, 13)));
    }

    #[test]
    fn recurring_ride_still_matches_its_own_date() {
        // Base date is a Monday but only Wednesday (3) is selected;
        // the exact date still matches.
        let days = WeekdaySet::from_indices(&[3]).unwrap();
        let r = ride(date(2024, 1, 1), Recurrence::Weekly(days));
        assert!(r.runs_on(date(2024, 1, 1)));
    }

    #[test]
    fn ownership_check() {
        let r = ride(date(2024, 1, 1), Recurrence::OneOff);
        let owner = UserId::new("u1");
        let other = UserId::new("u2");

        assert!(r.is_owned_by(Some(&owner)));
        assert!(!r.is_owned_by(Some(&other)));
        assert!(!r.is_owned_by(None));
    }
}
