//! Wire row → domain conversion.
//!
//! This is the validation boundary: anything malformed in a stored row is
//! rejected here with a specific error, so the feed builder only ever
//! sees well-typed rides.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    DayTime, InvalidRideKind, InvalidWeekday, Recurrence, Ride, RideId, RideKind, TimeError,
    UserId, WeekdaySet,
};

use super::types::RideRow;

/// Error converting a stored row into a domain ride.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The ride kind string is unknown
    #[error(transparent)]
    Kind(#[from] InvalidRideKind),

    /// The date is not "YYYY-MM-DD"
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    Date(String),

    /// The time is not a valid "HH:MM"
    #[error(transparent)]
    Time(#[from] TimeError),

    /// A recurring-day index is out of range
    #[error(transparent)]
    Weekday(#[from] InvalidWeekday),

    /// The creation timestamp is not RFC 3339
    #[error("invalid createdAt timestamp {0:?}")]
    Timestamp(String),
}

/// Validate a wire row into a domain `Ride`.
pub fn ride_from_row(row: &RideRow) -> Result<Ride, ConversionError> {
    let kind = RideKind::parse(&row.kind)?;

    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
        .map_err(|_| ConversionError::Date(row.date.clone()))?;

    let time = DayTime::parse(&row.time)?;

    let recurrence = if row.is_recurring {
        Recurrence::Weekly(WeekdaySet::from_indices(&row.recurring_days)?)
    } else {
        Recurrence::OneOff
    };

    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ConversionError::Timestamp(row.created_at.clone()))?;

    Ok(Ride {
        id: RideId::new(&row.id),
        kind,
        origin: row.origin.clone(),
        destination: row.destination.clone(),
        date,
        time,
        seats: row.seats,
        driver_name: row.driver_name.clone(),
        phone: row.phone.clone(),
        notes: row.notes.clone(),
        recurrence,
        owner: UserId::new(&row.owner_id),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RideRow {
        RideRow {
            id: "r1".to_string(),
            kind: "offer".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            date: "2024-01-01".to_string(),
            time: "08:00".to_string(),
            seats: 3,
            driver_name: "דוד".to_string(),
            phone: "050-1234567".to_string(),
            notes: None,
            is_recurring: false,
            recurring_days: vec![],
            owner_id: "u1".to_string(),
            created_at: "2024-01-01T06:00:00Z".to_string(),
        }
    }

    #[test]
    fn valid_row_converts() {
        let ride = ride_from_row(&row()).unwrap();
        assert_eq!(ride.id.as_str(), "r1");
        assert_eq!(ride.kind, RideKind::Offer);
        assert_eq!(ride.time.to_string(), "08:00");
        assert_eq!(ride.recurrence, Recurrence::OneOff);
        assert_eq!(ride.owner.as_str(), "u1");
    }

    #[test]
    fn recurring_row_converts_day_set() {
        let mut r = row();
        r.is_recurring = true;
        r.recurring_days = vec![1, 3];

        let ride = ride_from_row(&r).unwrap();
        match ride.recurrence {
            Recurrence::Weekly(days) => {
                assert!(days.contains(1));
                assert!(days.contains(3));
                assert_eq!(days.len(), 2);
            }
            Recurrence::OneOff => panic!("expected weekly recurrence"),
        }
    }

    #[test]
    fn recurring_days_ignored_when_not_recurring() {
        // A stale day list on a non-recurring row must not resurrect it.
        let mut r = row();
        r.is_recurring = false;
        r.recurring_days = vec![1, 3];

        let ride = ride_from_row(&r).unwrap();
        assert_eq!(ride.recurrence, Recurrence::OneOff);
    }

    #[test]
    fn bad_kind_rejected() {
        let mut r = row();
        r.kind = "carpool".to_string();
        assert!(matches!(
            ride_from_row(&r),
            Err(ConversionError::Kind(_))
        ));
    }

    #[test]
    fn bad_date_rejected() {
        let mut r = row();
        r.date = "01/01/2024".to_string();
        assert!(matches!(ride_from_row(&r), Err(ConversionError::Date(_))));
    }

    #[test]
    fn bad_time_rejected() {
        let mut r = row();
        r.time = "8:00".to_string();
        assert!(matches!(ride_from_row(&r), Err(ConversionError::Time(_))));
    }

    #[test]
    fn bad_weekday_rejected() {
        let mut r = row();
        r.is_recurring = true;
        r.recurring_days = vec![6];
        assert!(matches!(
            ride_from_row(&r),
            Err(ConversionError::Weekday(InvalidWeekday(6)))
        ));
    }

    #[test]
    fn bad_timestamp_rejected() {
        let mut r = row();
        r.created_at = "yesterday".to_string();
        assert!(matches!(
            ride_from_row(&r),
            Err(ConversionError::Timestamp(_))
        ));
    }
}
