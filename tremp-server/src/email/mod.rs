//! Ride requests arriving over the community mailing list.
//!
//! The settlement's older channel is a plain email group; a reader that
//! ingests it for real needs a hosted mail hook, so this snapshot ships a
//! bundled sample instead. Requests are browsed on their own tab: they are
//! filtered by the same destination rule as the feed but never merged into
//! it, since their times are loose free-text guesses.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::feed::DestinationFilter;

/// Israeli mobile number, optionally dashed after the prefix.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"05\d-?\d{7}").expect("phone regex is valid"));

/// A ride request heuristically extracted from a mailing-list message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    /// Snapshot-local id.
    pub id: String,
    /// Sender display name.
    pub sender_name: String,
    /// Sender address.
    pub sender_email: String,
    /// Original subject line.
    pub subject: String,
    /// Original body text.
    pub body: String,
    /// Best-guess origin mentioned in the message.
    pub detected_origin: String,
    /// Best-guess destination mentioned in the message.
    pub detected_destination: String,
    /// Best-guess departure time as written ("HH:MM" when guessable).
    pub detected_time: String,
    /// When the message arrived.
    pub received_at: DateTime<Utc>,
}

impl EmailRequest {
    /// Phone number mentioned in the body, if any.
    pub fn phone(&self) -> Option<&str> {
        extract_phone(&self.body)
    }
}

/// Pull the first Israeli mobile number out of free text.
pub fn extract_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str())
}

/// Filter requests by the board's destination rule.
///
/// The query is matched against the detected places and the raw body, so
/// a destination only mentioned in passing still surfaces the message.
pub fn filter_requests<'a>(
    requests: &'a [EmailRequest],
    filter: &DestinationFilter,
) -> Vec<&'a EmailRequest> {
    requests
        .iter()
        .filter(|req| {
            filter.matches_any([
                req.detected_origin.as_str(),
                req.detected_destination.as_str(),
                req.body.as_str(),
            ])
        })
        .collect()
}

/// The bundled sample snapshot of mailing-list requests.
pub fn sample_requests() -> Vec<EmailRequest> {
    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .expect("bundled timestamp is valid")
            .with_timezone(&Utc)
    }

    vec![
        EmailRequest {
            id: "e1".to_string(),
            sender_name: "רחלי כהן".to_string(),
            sender_email: "racheli@gmail.com".to_string(),
            subject: "מחפשת טרמפ לירושלים מחר בבוקר".to_string(),
            body: "היי, צריכה להגיע לגבעת שאול באזור 8 בבוקר. אם מישהו יוצא אשמח להצטרף. רחלי 050-9999999"
                .to_string(),
            detected_origin: "מעלה עמוס".to_string(),
            detected_destination: "ירושלים".to_string(),
            detected_time: "08:00".to_string(),
            received_at: at("2024-01-01T05:30:00Z"),
        },
        EmailRequest {
            id: "e2".to_string(),
            sender_name: "דניאל".to_string(),
            sender_email: "daniel@walla.co.il".to_string(),
            subject: "יוצא מביתר למעלה עמוס ב16:00".to_string(),
            body: "יש 3 מקומות פנויים. חוזר דרך צומת הגוש.".to_string(),
            detected_origin: "ביתר עילית".to_string(),
            detected_destination: "מעלה עמוס".to_string(),
            detected_time: "16:00".to_string(),
            received_at: at("2024-01-01T04:30:00Z"),
        },
    ]
}
