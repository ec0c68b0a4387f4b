//! Wire types for the hosted ride store.
//!
//! Rows travel as JSON with camelCase keys. Times and dates stay strings
//! on the wire; validation into domain types happens in `convert`.

use serde::{Deserialize, Serialize};

/// A ride row as stored in the hosted `rides` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRow {
    /// Store-assigned row id.
    pub id: String,

    /// "offer" or "request".
    #[serde(rename = "type")]
    pub kind: String,

    /// Departure place.
    pub origin: String,

    /// Arrival place.
    pub destination: String,

    /// Calendar day, "YYYY-MM-DD".
    pub date: String,

    /// Time of day, "HH:MM".
    pub time: String,

    /// Seat count.
    pub seats: u32,

    /// Display name of the poster.
    pub driver_name: String,

    /// Contact phone.
    pub phone: String,

    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the ride repeats weekly.
    pub is_recurring: bool,

    /// Weekday indices 0 (Sunday) .. 5 (Friday); empty means every day.
    #[serde(default)]
    pub recurring_days: Vec<u8>,

    /// Identity of the posting user.
    pub owner_id: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A ride row being created; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRideRow {
    /// "offer" or "request".
    #[serde(rename = "type")]
    pub kind: String,

    /// Departure place.
    pub origin: String,

    /// Arrival place.
    pub destination: String,

    /// Calendar day, "YYYY-MM-DD".
    pub date: String,

    /// Time of day, "HH:MM".
    pub time: String,

    /// Seat count.
    pub seats: u32,

    /// Display name of the poster.
    pub driver_name: String,

    /// Contact phone.
    pub phone: String,

    /// Free-text notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether the ride repeats weekly.
    pub is_recurring: bool,

    /// Weekday indices 0 (Sunday) .. 5 (Friday).
    pub recurring_days: Vec<u8>,

    /// Identity of the posting user.
    pub owner_id: String,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_deserializes_camel_case() {
        let json = r#"{
            "id": "r1",
            "type": "offer",
            "origin": "מעלה עמוס",
            "destination": "ירושלים",
            "date": "2024-01-01",
            "time": "08:00",
            "seats": 3,
            "driverName": "דוד",
            "phone": "050-1234567",
            "isRecurring": false,
            "recurringDays": [],
            "ownerId": "u1",
            "createdAt": "2024-01-01T06:00:00Z"
        }"#;

        let row: RideRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "r1");
        assert_eq!(row.kind, "offer");
        assert_eq!(row.driver_name, "דוד");
        assert_eq!(row.owner_id, "u1");
        assert!(row.notes.is_none());
        assert!(row.recurring_days.is_empty());
    }

    #[test]
    fn missing_recurring_days_defaults_to_empty() {
        let json = r#"{
            "id": "r1",
            "type": "request",
            "origin": "a",
            "destination": "b",
            "date": "2024-01-01",
            "time": "08:00",
            "seats": 1,
            "driverName": "x",
            "phone": "050-0000000",
            "isRecurring": true,
            "ownerId": "u1",
            "createdAt": "2024-01-01T06:00:00Z"
        }"#;

        let row: RideRow = serde_json::from_str(json).unwrap();
        assert!(row.recurring_days.is_empty());
    }

    #[test]
    fn new_row_serializes_camel_case() {
        let row = NewRideRow {
            kind: "offer".to_string(),
            origin: "a".to_string(),
            destination: "b".to_string(),
            date: "2024-01-01".to_string(),
            time: "08:00".to_string(),
            seats: 2,
            driver_name: "x".to_string(),
            phone: "050-0000000".to_string(),
            notes: None,
            is_recurring: false,
            recurring_days: vec![],
            owner_id: "u1".to_string(),
            created_at: "2024-01-01T06:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], "offer");
        assert_eq!(json["driverName"], "x");
        assert_eq!(json["ownerId"], "u1");
        assert!(json.get("notes").is_none());
        assert!(json.get("driver_name").is_none());
    }
}
