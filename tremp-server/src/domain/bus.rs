//! Static bus line types.
//!
//! A `BusLine` is reference data bundled with the server: a route number,
//! operator, endpoints, and the departure times for a generic day. The
//! schedule has no date dimension; departures are displayed on whichever
//! date the user has selected.

use super::time::DayTime;

/// A scheduled public-transit route with fixed daily departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusLine {
    /// Route number as displayed (e.g. "409").
    pub line: String,
    /// Operator name (e.g. "אלקטרה אפיקים").
    pub operator: String,
    /// Departure place.
    pub origin: String,
    /// Arrival place.
    pub destination: String,
    /// Departure times for a generic day, ascending.
    pub schedule: Vec<DayTime>,
}

impl BusLine {
    /// Stable identity for one departure of this line.
    ///
    /// The same line number runs in both directions, so the destination is
    /// part of the identity alongside the time.
    pub fn departure_id(&self, departure: DayTime) -> String {
        format!("bus-{}-{}-{}", self.line, self.destination, departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departure_id_distinguishes_directions() {
        let outbound = BusLine {
            line: "409".to_string(),
            operator: "אלקטרה אפיקים".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            schedule: vec![DayTime::parse("06:00").unwrap()],
        };
        let inbound = BusLine {
            line: "409".to_string(),
            operator: "אלקטרה אפיקים".to_string(),
            origin: "ירושלים".to_string(),
            destination: "מעלה עמוס".to_string(),
            schedule: vec![DayTime::parse("08:00").unwrap()],
        };

        let t = DayTime::parse("08:00").unwrap();
        assert_ne!(outbound.departure_id(t), inbound.departure_id(t));
    }

    #[test]
    fn departure_id_is_stable() {
        let line = BusLine {
            line: "44".to_string(),
            operator: "אלקטרה אפיקים".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ביתר עילית".to_string(),
            schedule: vec![],
        };
        let t = DayTime::parse("07:00").unwrap();
        assert_eq!(line.departure_id(t), line.departure_id(t));
        assert_eq!(line.departure_id(t), "bus-44-ביתר עילית-07:00");
    }
}
