//! The unified feed item type.

use std::sync::Arc;

use crate::domain::{BusLine, DayTime, Ride};

/// One entry in the merged transport feed.
///
/// An explicit sum over the two sources so renderers and the merge step
/// stay exhaustive: adding a third transport kind is a compile error
/// everywhere it matters.
#[derive(Debug, Clone)]
pub enum DisplayItem {
    /// A user-submitted ride posting.
    Ride(Arc<Ride>),
    /// One departure of a static bus line.
    Bus {
        /// The line this departure belongs to.
        line: Arc<BusLine>,
        /// The specific scheduled departure time.
        departure: DayTime,
    },
}

impl DisplayItem {
    /// Stable identity for rendering and re-render diffing.
    ///
    /// Rides reuse their store id; bus departures synthesize one from the
    /// line and time, since the schedule has no ids of its own.
    pub fn id(&self) -> String {
        match self {
            Self::Ride(ride) => format!("ride-{}", ride.id),
            Self::Bus { line, departure } => line.departure_id(*departure),
        }
    }

    /// The time of day this item sorts by.
    pub fn time(&self) -> DayTime {
        match self {
            Self::Ride(ride) => ride.time,
            Self::Bus { departure, .. } => *departure,
        }
    }

    /// True for ride postings.
    pub fn is_ride(&self) -> bool {
        matches!(self, Self::Ride(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayTime, Recurrence, RideId, RideKind, UserId};
    use chrono::{DateTime, NaiveDate, Utc};

    fn sample_ride() -> Arc<Ride> {
        Arc::new(Ride {
            id: RideId::new("abc123"),
            kind: RideKind::Offer,
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: DayTime::parse("08:00").unwrap(),
            seats: 3,
            driver_name: "דוד".to_string(),
            phone: "050-1234567".to_string(),
            notes: None,
            recurrence: Recurrence::OneOff,
            owner: UserId::new("u1"),
            created_at: DateTime::<Utc>::MIN_UTC,
        })
    }

    fn sample_line() -> Arc<BusLine> {
        Arc::new(BusLine {
            line: "409".to_string(),
            operator: "אלקטרה אפיקים".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            schedule: vec![DayTime::parse("09:00").unwrap()],
        })
    }

    #[test]
    fn ride_item_identity_and_time() {
        let item = DisplayItem::Ride(sample_ride());
        assert_eq!(item.id(), "ride-abc123");
        assert_eq!(item.time().to_string(), "08:00");
        assert!(item.is_ride());
    }

    #[test]
    fn bus_item_identity_and_time() {
        let item = DisplayItem::Bus {
            line: sample_line(),
            departure: DayTime::parse("09:00").unwrap(),
        };
        assert_eq!(item.id(), "bus-409-ירושלים-09:00");
        assert_eq!(item.time().to_string(), "09:00");
        assert!(!item.is_ride());
    }
}
