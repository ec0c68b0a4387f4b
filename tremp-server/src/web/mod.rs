//! Web layer for the ride-share board.
//!
//! Provides HTTP endpoints for browsing the merged transport feed and
//! managing ride postings.

mod dto;
mod links;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use links::{TravelMode, google_maps_url, moovit_url, whatsapp_url};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
