//! Data transfer objects for web requests and responses.
//!
//! Responses use camelCase keys to match the store's wire shape, so the
//! browser client handles one field convention everywhere.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DayTime, Recurrence, Ride, weekday_index};
use crate::email::EmailRequest;
use crate::feed::DisplayItem;

use super::links::{TravelMode, google_maps_url, moovit_url, whatsapp_url};

/// Query parameters for the feed endpoint.
///
/// Everything is optional: the defaults reproduce the board's initial
/// view (all destinations, today, from now until end of day).
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    /// Destination filter text; empty or a sentinel means all
    pub dest: Option<String>,

    /// Date being browsed, "YYYY-MM-DD" (defaults to today)
    pub date: Option<String>,

    /// Window start, "HH:MM" (defaults to the current time)
    pub start: Option<String>,

    /// Window end, "HH:MM" (defaults to "23:59")
    pub end: Option<String>,
}

/// Query parameters for the email-requests endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    /// Destination filter text; empty or a sentinel means all
    pub dest: Option<String>,
}

/// Request to create a ride posting.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRideRequest {
    /// "offer" or "request"
    #[serde(rename = "type")]
    pub kind: String,

    /// Departure place
    pub origin: String,

    /// Arrival place
    pub destination: String,

    /// Calendar day, "YYYY-MM-DD"
    pub date: String,

    /// Time of day, "HH:MM"
    pub time: String,

    /// Seat count
    pub seats: u32,

    /// Poster display name (defaults to the signed-in name)
    pub driver_name: Option<String>,

    /// Contact phone
    pub phone: String,

    /// Free-text notes
    pub notes: Option<String>,

    /// Whether the ride repeats weekly
    #[serde(default)]
    pub is_recurring: bool,

    /// Weekday indices 0 (Sunday) .. 5 (Friday)
    #[serde(default)]
    pub recurring_days: Vec<u8>,
}

/// One item in the feed response.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedItemResult {
    Ride(RideResult),
    Bus(BusResult),
}

impl FeedItemResult {
    /// Create from a feed item, with `now` for countdown badges.
    pub fn from_item(item: &DisplayItem, now: DayTime) -> Self {
        match item {
            DisplayItem::Ride(ride) => Self::Ride(RideResult::from_ride(ride)),
            DisplayItem::Bus { line, departure } => Self::Bus(BusResult {
                id: item.id(),
                line: line.line.clone(),
                operator: line.operator.clone(),
                origin: line.origin.clone(),
                destination: line.destination.clone(),
                departure_time: departure.to_string(),
                minutes_left: departure.minutes_after(now),
                maps_link: google_maps_url(&line.origin, &line.destination, TravelMode::Transit),
                moovit_link: moovit_url(line),
            }),
        }
    }
}

/// A ride posting in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideResult {
    /// Feed identity ("ride-{store id}")
    pub id: String,

    /// "offer" or "request"
    pub kind: String,

    /// Departure place
    pub origin: String,

    /// Arrival place
    pub destination: String,

    /// Calendar day, "YYYY-MM-DD"
    pub date: String,

    /// Time of day, "HH:MM"
    pub time: String,

    /// Seat count
    pub seats: u32,

    /// Poster display name
    pub driver_name: String,

    /// Contact phone
    pub phone: String,

    /// Free-text notes
    pub notes: Option<String>,

    /// Whether the ride repeats weekly
    pub is_recurring: bool,

    /// Hebrew recurrence label ("קבוע", "כל יום", or day letters)
    pub recurrence_label: Option<String>,

    /// Owner id, for the client-side "my ride" badge
    pub owner_id: String,

    /// Google Maps driving directions
    pub maps_link: String,

    /// WhatsApp chat link for the contact phone
    pub whatsapp_link: Option<String>,
}

impl RideResult {
    /// Create from a domain ride.
    pub fn from_ride(ride: &Ride) -> Self {
        Self {
            id: format!("ride-{}", ride.id),
            kind: ride.kind.as_str().to_string(),
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            date: ride.date.format("%Y-%m-%d").to_string(),
            time: ride.time.to_string(),
            seats: ride.seats,
            driver_name: ride.driver_name.clone(),
            phone: ride.phone.clone(),
            notes: ride.notes.clone(),
            is_recurring: ride.recurrence.is_recurring(),
            recurrence_label: recurrence_label(&ride.recurrence),
            owner_id: ride.owner.as_str().to_string(),
            maps_link: google_maps_url(&ride.origin, &ride.destination, TravelMode::Driving),
            whatsapp_link: whatsapp_url(&ride.phone),
        }
    }
}

/// A bus departure in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusResult {
    /// Synthesized stable identity
    pub id: String,

    /// Route number
    pub line: String,

    /// Operator name
    pub operator: String,

    /// Departure place
    pub origin: String,

    /// Arrival place
    pub destination: String,

    /// Departure time, "HH:MM"
    pub departure_time: String,

    /// Minutes from now until departure (negative once it has left)
    pub minutes_left: i64,

    /// Google Maps transit directions
    pub maps_link: String,

    /// Moovit line search
    pub moovit_link: String,
}

/// Response for the feed endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    /// The date the feed was built for, "YYYY-MM-DD"
    pub date: String,

    /// Hebrew heading for the date ("יום שני, 1 בינואר")
    pub date_label: String,

    /// Window actually applied, "HH:MM"
    pub start: String,

    /// Window actually applied, "HH:MM"
    pub end: String,

    /// Merged, time-ordered items
    pub items: Vec<FeedItemResult>,
}

/// An email-derived request in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequestResult {
    /// Snapshot-local id
    pub id: String,

    /// Sender display name
    pub sender_name: String,

    /// Original subject line
    pub subject: String,

    /// Original body text
    pub body: String,

    /// Best-guess origin
    pub detected_origin: String,

    /// Best-guess destination
    pub detected_destination: String,

    /// Best-guess departure time as written
    pub detected_time: String,

    /// RFC 3339 arrival timestamp
    pub received_at: String,

    /// Phone number found in the body, if any
    pub phone: Option<String>,

    /// WhatsApp chat link for that phone
    pub whatsapp_link: Option<String>,
}

impl EmailRequestResult {
    /// Create from an email request.
    pub fn from_request(req: &EmailRequest) -> Self {
        let phone = req.phone().map(str::to_string);
        let whatsapp_link = phone.as_deref().and_then(whatsapp_url);

        Self {
            id: req.id.clone(),
            sender_name: req.sender_name.clone(),
            subject: req.subject.clone(),
            body: req.body.clone(),
            detected_origin: req.detected_origin.clone(),
            detected_destination: req.detected_destination.clone(),
            detected_time: req.detected_time.clone(),
            received_at: req.received_at.to_rfc3339(),
            phone,
            whatsapp_link,
        }
    }
}

/// Response for the email-requests endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailListResponse {
    /// Matching requests, newest first
    pub requests: Vec<EmailRequestResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Hebrew recurrence label, mirroring the ride card:
/// no label for one-off rides, "קבוע" for an empty day set displayed as
/// plain "recurring", "כל יום" once five or more days are selected, and
/// the day letters otherwise.
fn recurrence_label(recurrence: &Recurrence) -> Option<String> {
    match recurrence {
        Recurrence::OneOff => None,
        Recurrence::Weekly(days) if days.is_empty() => Some("קבוע".to_string()),
        Recurrence::Weekly(days) if days.len() >= 5 => Some("כל יום".to_string()),
        Recurrence::Weekly(days) => Some(days.labels().join(", ")),
    }
}

/// Hebrew weekday names, Sunday first.
const WEEKDAY_NAMES: [&str; 7] = [
    "יום ראשון",
    "יום שני",
    "יום שלישי",
    "יום רביעי",
    "יום חמישי",
    "יום שישי",
    "שבת",
];

/// Hebrew month names.
const MONTH_NAMES: [&str; 12] = [
    "ינואר",
    "פברואר",
    "מרץ",
    "אפריל",
    "מאי",
    "יוני",
    "יולי",
    "אוגוסט",
    "ספטמבר",
    "אוקטובר",
    "נובמבר",
    "דצמבר",
];

/// Hebrew heading for a date: weekday, day, month.
pub fn hebrew_date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[weekday_index(date) as usize];
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}, {} ב{}", weekday, date.day(), month)
}
