//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::Authenticator;
use crate::email::EmailRequest;
use crate::schedules::BusSchedules;
use crate::store::RideSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Where ride postings come from (hosted store or demo data)
    pub rides: RideSource,

    /// Token verification for write requests
    pub auth: Arc<Authenticator>,

    /// Static bus timetables
    pub schedules: Arc<BusSchedules>,

    /// Bundled mailing-list request snapshot
    pub email_requests: Arc<Vec<EmailRequest>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        rides: RideSource,
        auth: Authenticator,
        schedules: BusSchedules,
        email_requests: Vec<EmailRequest>,
    ) -> Self {
        Self {
            rides,
            auth: Arc::new(auth),
            schedules: Arc::new(schedules),
            email_requests: Arc::new(email_requests),
        }
    }
}
