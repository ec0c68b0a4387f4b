//! Caching layer for the hosted ride store.
//!
//! Every feed request wants the full ride snapshot, and the board gets
//! bursts of them (each filter keystroke re-renders). A short TTL over the
//! list endpoint absorbs the bursts without making the board feel stale;
//! writes invalidate immediately so the author always sees their change.
//!
//! The feed builder itself never caches; this sits entirely at the store
//! boundary.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Ride;
use crate::store::{NewRideRow, RideRow, StoreClient, StoreError, rides_from_rows};

/// The snapshot cache has exactly one entry: the full ride list.
type SnapshotKey = ();

/// Cached, already-validated snapshot.
type SnapshotEntry = Arc<Vec<Arc<Ride>>>;

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached snapshot.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5),
        }
    }
}

/// Ride store client with snapshot caching.
///
/// Wraps a `StoreClient`; list responses are validated once and cached,
/// writes pass through and drop the cached snapshot.
pub struct CachedRideStore {
    client: StoreClient,
    snapshot: MokaCache<SnapshotKey, SnapshotEntry>,
}

impl CachedRideStore {
    /// Create a new cached store.
    pub fn new(client: StoreClient, config: &CacheConfig) -> Self {
        let snapshot = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { client, snapshot }
    }

    /// Current snapshot of valid rides, from cache when fresh.
    pub async fn snapshot(&self) -> Result<SnapshotEntry, StoreError> {
        if let Some(cached) = self.snapshot.get(&()).await {
            return Ok(cached);
        }

        let rows = self.client.list_rides().await?;
        let entry: SnapshotEntry = Arc::new(rides_from_rows(&rows));

        self.snapshot.insert((), Arc::clone(&entry)).await;
        Ok(entry)
    }

    /// Create a ride and invalidate the snapshot.
    pub async fn create_ride(
        &self,
        new_ride: &NewRideRow,
        user_token: &str,
    ) -> Result<RideRow, StoreError> {
        let created = self.client.create_ride(new_ride, user_token).await?;
        self.snapshot.invalidate_all();
        Ok(created)
    }

    /// Delete a ride and invalidate the snapshot.
    pub async fn delete_ride(&self, ride_id: &str, user_token: &str) -> Result<(), StoreError> {
        self.client.delete_ride(ride_id, user_token).await?;
        self.snapshot.invalidate_all();
        Ok(())
    }
}
