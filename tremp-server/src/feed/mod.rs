//! The transport feed builder.
//!
//! This module implements the board's core: merging user-submitted ride
//! postings with the static bus schedules into a single time-ordered
//! sequence, filtered by destination, date, and time window.
//!
//! The builder is a pure function; all fetching, caching, and rendering
//! live elsewhere.

mod build;
mod filter;
mod item;


pub use build::build_feed;
pub use filter::{ALL_SENTINEL_EN, ALL_SENTINEL_HE, DestinationFilter, FeedFilter};
pub use item::DisplayItem;
