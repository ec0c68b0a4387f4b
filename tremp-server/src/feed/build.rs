//! The transport feed builder.
//!
//! Merges user-submitted rides and static bus schedules into one
//! time-ordered, filterable sequence. This is a pure function over its
//! inputs: handlers fetch a snapshot, build a filter, and call it; no
//! state survives between calls and nothing here can fail on well-typed
//! input.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{BusLine, Ride};

use super::filter::FeedFilter;
use super::item::DisplayItem;

/// Build the merged transport feed for one filter state.
///
/// Rides are included when the destination filter matches their origin,
/// destination, or notes, they run on the selected date, and their time
/// falls inside the window (inclusive). Each departure of a matching bus
/// line inside the window becomes its own item. The result is sorted
/// ascending by time of day; at equal times rides come before buses, and
/// within each source the input order is preserved, so the output is
/// deterministic for a given input.
///
/// # Examples
///
/// ```
/// use tremp_server::feed::{DestinationFilter, FeedFilter, build_feed};
/// use tremp_server::domain::TimeRange;
/// use chrono::NaiveDate;
///
/// let filter = FeedFilter::new(
///     DestinationFilter::All,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     TimeRange::full_day(),
/// );
/// let items = build_feed(&[], &[], &filter);
/// assert!(items.is_empty());
/// ```
pub fn build_feed(
    rides: &[Arc<Ride>],
    lines: &[Arc<BusLine>],
    filter: &FeedFilter,
) -> Vec<DisplayItem> {
    let mut items: Vec<DisplayItem> = Vec::new();

    for ride in rides {
        if ride_matches(ride, filter) {
            items.push(DisplayItem::Ride(Arc::clone(ride)));
        }
    }
    let ride_count = items.len();

    for line in lines {
        if !line_matches(line, filter) {
            continue;
        }
        for &departure in &line.schedule {
            if filter.window.contains(departure) {
                items.push(DisplayItem::Bus {
                    line: Arc::clone(line),
                    departure,
                });
            }
        }
    }

    // Stable sort on time alone: rides were pushed first, so at equal
    // times they stay ahead of buses, and input order survives within
    // each source.
    items.sort_by_key(|item| item.time());

    debug!(
        rides = ride_count,
        buses = items.len() - ride_count,
        date = %filter.date,
        window = %filter.window,
        "built transport feed"
    );

    items
}

/// Ride inclusion rule: place/notes match, date match, window match.
fn ride_matches(ride: &Ride, filter: &FeedFilter) -> bool {
    let fields = [
        ride.origin.as_str(),
        ride.destination.as_str(),
        ride.notes.as_deref().unwrap_or(""),
    ];

    filter.destination.matches_any(fields)
        && ride.runs_on(filter.date)
        && filter.window.contains(ride.time)
}

/// Line inclusion rule: the destination filter against both endpoints.
fn line_matches(line: &BusLine, filter: &FeedFilter) -> bool {
    filter
        .destination
        .matches_any([line.origin.as_str(), line.destination.as_str()])
}
