//! External deep-link generation.
//!
//! Cards link out to Google Maps for navigation and to Moovit for live
//! line times. Neither service exposes stable ids for our data, so both
//! links go through the services' search/directions pages.

use reqwest::Url;

use crate::domain::BusLine;

/// Travel mode for a Google Maps directions link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    /// Car-pool rides navigate by car.
    Driving,
    /// Bus departures navigate by public transit.
    Transit,
}

impl TravelMode {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Transit => "transit",
        }
    }
}

/// Generate a Google Maps directions URL between two places.
///
/// # Example
///
/// ```
/// use tremp_server::web::{TravelMode, google_maps_url};
///
/// let url = google_maps_url("Tel Aviv", "Haifa", TravelMode::Driving);
/// assert!(url.starts_with("https://www.google.com/maps/dir/?api=1"));
/// assert!(url.contains("travelmode=driving"));
/// ```
pub fn google_maps_url(origin: &str, destination: &str, mode: TravelMode) -> String {
    Url::parse_with_params(
        "https://www.google.com/maps/dir/",
        &[
            ("api", "1"),
            ("origin", origin),
            ("destination", destination),
            ("travelmode", mode.as_str()),
        ],
    )
    .expect("static base URL is valid")
    .to_string()
}

/// Generate a Moovit search URL for a bus line toward its destination.
pub fn moovit_url(line: &BusLine) -> String {
    let query = format!("{} {}", line.line, line.destination);
    Url::parse_with_params("https://moovitapp.com/israel-1/search", &[("query", query)])
        .expect("static base URL is valid")
        .to_string()
}

/// Generate a WhatsApp chat link for an Israeli mobile number.
///
/// Local numbers ("05X...") become international ("9725X..."); a number
/// with no digits yields no link.
pub fn whatsapp_url(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let national = digits.strip_prefix('0').unwrap_or(&digits);
    if national.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/972{national}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayTime;

    fn line() -> BusLine {
        BusLine {
            line: "409".to_string(),
            operator: "אלקטרה אפיקים".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            schedule: vec![DayTime::parse("06:00").unwrap()],
        }
    }

    #[test]
    fn maps_url_driving() {
        let url = google_maps_url("מעלה עמוס", "ירושלים", TravelMode::Driving);
        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1"));
        assert!(url.contains("travelmode=driving"));
        // Hebrew place names are percent-encoded
        assert!(!url.contains("ירושלים"));
        assert!(url.contains("%D7%99%D7%A8%D7%95%D7%A9%D7%9C%D7%99%D7%9D"));
    }

    #[test]
    fn maps_url_transit() {
        let url = google_maps_url("a", "b", TravelMode::Transit);
        assert!(url.contains("travelmode=transit"));
        assert!(url.contains("origin=a"));
        assert!(url.contains("destination=b"));
    }

    #[test]
    fn moovit_url_includes_line_and_destination() {
        let url = moovit_url(&line());
        assert!(url.starts_with("https://moovitapp.com/israel-1/search?query=409"));
        assert!(url.contains("%D7%99%D7%A8%D7%95%D7%A9%D7%9C%D7%99%D7%9D"));
    }

    #[test]
    fn whatsapp_url_strips_formatting_and_leading_zero() {
        assert_eq!(
            whatsapp_url("050-1234567").as_deref(),
            Some("https://wa.me/972501234567")
        );
        assert_eq!(
            whatsapp_url("0501234567").as_deref(),
            Some("https://wa.me/972501234567")
        );
    }

    #[test]
    fn whatsapp_url_empty_phone_gives_none() {
        assert!(whatsapp_url("").is_none());
        assert!(whatsapp_url("---").is_none());
    }
}
