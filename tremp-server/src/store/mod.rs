//! Hosted ride store access.
//!
//! The store is a hosted document collection reached over HTTP. This
//! module provides the wire types, the real client, an in-memory mock for
//! development and tests, and the row→domain validation boundary.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::sync::Arc;

use tracing::warn;

use crate::cache::CachedRideStore;
use crate::domain::{Ride, UserId};

pub use client::{StoreClient, StoreConfig};
pub use convert::{ConversionError, ride_from_row};
pub use error::StoreError;
pub use mock::MockRideStore;
pub use types::{NewRideRow, RideRow};

/// Validate a batch of wire rows, skipping malformed ones.
///
/// A single bad row (hand-edited in the store console, usually) must not
/// take the whole board down, so failures are logged and dropped rather
/// than poisoning the snapshot.
pub fn rides_from_rows(rows: &[RideRow]) -> Vec<Arc<Ride>> {
    rows.iter()
        .filter_map(|row| match ride_from_row(row) {
            Ok(ride) => Some(Arc::new(ride)),
            Err(e) => {
                warn!(ride_id = %row.id, error = %e, "skipping malformed ride row");
                None
            }
        })
        .collect()
}

/// Where ride postings come from.
///
/// The web layer doesn't care whether it is talking to the hosted store
/// or the bundled demo data; both ends expose the same three operations.
#[derive(Clone)]
pub enum RideSource {
    /// The hosted store, behind the snapshot cache.
    Remote(Arc<CachedRideStore>),
    /// In-memory demo/test data.
    Local(MockRideStore),
}

impl RideSource {
    /// Current snapshot of valid rides, ordered by (date, time).
    pub async fn snapshot(&self) -> Result<Arc<Vec<Arc<Ride>>>, StoreError> {
        match self {
            Self::Remote(cached) => cached.snapshot().await,
            Self::Local(mock) => {
                let rows = mock.list_rides().await?;
                Ok(Arc::new(rides_from_rows(&rows)))
            }
        }
    }

    /// Create a ride for the signed-in user.
    pub async fn create_ride(
        &self,
        new_ride: &NewRideRow,
        user_token: &str,
    ) -> Result<RideRow, StoreError> {
        match self {
            Self::Remote(cached) => cached.create_ride(new_ride, user_token).await,
            Self::Local(mock) => mock.create_ride(new_ride, user_token).await,
        }
    }

    /// Delete a ride owned by the signed-in user.
    ///
    /// The remote store checks ownership through the user token; the mock
    /// checks against the given user id.
    pub async fn delete_ride(
        &self,
        ride_id: &str,
        user_token: &str,
        user: &UserId,
    ) -> Result<(), StoreError> {
        match self {
            Self::Remote(cached) => cached.delete_ride(ride_id, user_token).await,
            Self::Local(mock) => mock.delete_ride(ride_id, user.as_str()).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, time: &str) -> RideRow {
        RideRow {
            id: id.to_string(),
            kind: "offer".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            date: "2024-01-01".to_string(),
            time: time.to_string(),
            seats: 3,
            driver_name: "דוד".to_string(),
            phone: "050-1234567".to_string(),
            notes: None,
            is_recurring: false,
            recurring_days: vec![],
            owner_id: "u1".to_string(),
            created_at: "2024-01-01T06:00:00Z".to_string(),
        }
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let good = row("a", "08:00");
        let bad = row("b", "8 in the morning");

        let rides = rides_from_rows(&[good, bad]);
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].id.as_str(), "a");
    }

    #[tokio::test]
    async fn local_source_snapshot_converts_rows() {
        let source = RideSource::Local(MockRideStore::with_rows(vec![
            row("a", "08:00"),
            row("b", "07:00"),
        ]));

        let rides = source.snapshot().await.unwrap();
        assert_eq!(rides.len(), 2);
        // Store ordering: date then time
        assert_eq!(rides[0].id.as_str(), "b");
    }
}
