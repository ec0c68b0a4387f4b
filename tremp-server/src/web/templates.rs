//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::DayTime;
use crate::email::EmailRequest;
use crate::feed::DisplayItem;

use super::dto::{EmailRequestResult, FeedItemResult, RideResult};

// ============================================================================
// Page Templates
// ============================================================================

/// The board page: filter bar plus the feed shell.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Hebrew heading for the selected date.
    pub date_label: String,
}

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Feed items fragment.
#[derive(Template)]
#[template(path = "feed_items.html")]
pub struct FeedItemsTemplate {
    pub items: Vec<FeedItemView>,
    pub start: String,
    pub end: String,
}

/// Email request list fragment.
#[derive(Template)]
#[template(path = "email_list.html")]
pub struct EmailListTemplate {
    pub requests: Vec<EmailView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Feed item view model: a ride card or a bus card.
#[derive(Debug)]
pub enum FeedItemView {
    Ride(RideView),
    Bus(BusView),
}

impl FeedItemView {
    /// Create from a feed item, with `now` for countdown badges.
    pub fn from_item(item: &DisplayItem, now: DayTime) -> Self {
        match FeedItemResult::from_item(item, now) {
            FeedItemResult::Ride(ride) => Self::Ride(RideView::from_result(ride)),
            FeedItemResult::Bus(bus) => Self::Bus(BusView {
                minutes_label: minutes_label(bus.minutes_left),
                is_urgent: (1..=15).contains(&bus.minutes_left),
                line: bus.line,
                operator: bus.operator,
                origin: bus.origin,
                destination: bus.destination,
                departure_time: bus.departure_time,
                maps_link: bus.maps_link,
                moovit_link: bus.moovit_link,
            }),
        }
    }
}

/// Ride card view model.
#[derive(Debug)]
pub struct RideView {
    pub id: String,
    pub is_offer: bool,
    pub kind_label: &'static str,
    pub origin: String,
    pub destination: String,
    pub time: String,
    pub seats: u32,
    pub driver_name: String,
    pub phone: String,
    pub notes: Option<String>,
    pub recurrence_label: Option<String>,
    pub owner_id: String,
    pub maps_link: String,
    pub whatsapp_link: Option<String>,
}

impl RideView {
    fn from_result(ride: RideResult) -> Self {
        let is_offer = ride.kind == "offer";
        Self {
            id: ride.id,
            is_offer,
            kind_label: if is_offer { "מציע טרמפ" } else { "מחפש טרמפ" },
            origin: ride.origin,
            destination: ride.destination,
            time: ride.time,
            seats: ride.seats,
            driver_name: ride.driver_name,
            phone: ride.phone,
            notes: ride.notes,
            recurrence_label: ride.recurrence_label,
            owner_id: ride.owner_id,
            maps_link: ride.maps_link,
            whatsapp_link: ride.whatsapp_link,
        }
    }
}

/// Bus card view model.
#[derive(Debug)]
pub struct BusView {
    pub line: String,
    pub operator: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub minutes_label: String,
    pub is_urgent: bool,
    pub maps_link: String,
    pub moovit_link: String,
}

/// Email request view model.
#[derive(Debug)]
pub struct EmailView {
    pub sender_name: String,
    pub subject: String,
    pub body: String,
    pub detected_origin: String,
    pub detected_destination: String,
    pub detected_time: String,
    pub received_time: String,
    pub phone: Option<String>,
    pub whatsapp_link: Option<String>,
}

impl EmailView {
    /// Create from an email request.
    pub fn from_request(req: &EmailRequest) -> Self {
        let result = EmailRequestResult::from_request(req);
        Self {
            sender_name: result.sender_name,
            subject: result.subject,
            body: result.body,
            detected_origin: result.detected_origin,
            detected_destination: result.detected_destination,
            detected_time: result.detected_time,
            received_time: req.received_at.format("%H:%M").to_string(),
            phone: result.phone,
            whatsapp_link: result.whatsapp_link,
        }
    }
}

/// Hebrew countdown label for a bus departure.
fn minutes_label(minutes_left: i64) -> String {
    if minutes_left > 60 {
        format!("בעוד {} שעות", minutes_left / 60)
    } else if minutes_left > 0 {
        format!("בעוד {} דק'", minutes_left)
    } else {
        "יצא לדרך".to_string()
    }
}
