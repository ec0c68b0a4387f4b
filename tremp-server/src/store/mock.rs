//! In-memory ride store for development and tests.
//!
//! Serves the same operations as the real store client without network
//! access: a JSON-seeded row set behind a lock. Used as demo mode when no
//! store credentials are configured.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use super::error::StoreError;
use super::types::{NewRideRow, RideRow};

/// Mock ride store backed by an in-memory row set.
#[derive(Clone)]
pub struct MockRideStore {
    rows: Arc<RwLock<Vec<RideRow>>>,
    next_id: Arc<AtomicU64>,
}

impl MockRideStore {
    /// Create a mock store seeded with the given rows.
    pub fn with_rows(rows: Vec<RideRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Create an empty mock store.
    pub fn empty() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Create a mock store from a JSON file holding an array of ride rows.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| StoreError::ApiError {
            status: 0,
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let rows: Vec<RideRow> = serde_json::from_str(&json).map_err(|e| StoreError::Json {
            message: format!("Failed to parse {:?}: {}", path, e),
            body: None,
        })?;

        Ok(Self::with_rows(rows))
    }

    /// Snapshot of all rows, ordered by (date, time) ascending.
    ///
    /// Mimics the real `StoreClient::list_rides` interface.
    pub async fn list_rides(&self) -> Result<Vec<RideRow>, StoreError> {
        let rows = self.rows.read().await;
        let mut snapshot = rows.clone();
        snapshot.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        Ok(snapshot)
    }

    /// Insert a row, assigning a local id.
    ///
    /// The user token is accepted for interface parity and ignored.
    pub async fn create_ride(
        &self,
        new_ride: &NewRideRow,
        _user_token: &str,
    ) -> Result<RideRow, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let row = RideRow {
            id: format!("local-{id}"),
            kind: new_ride.kind.clone(),
            origin: new_ride.origin.clone(),
            destination: new_ride.destination.clone(),
            date: new_ride.date.clone(),
            time: new_ride.time.clone(),
            seats: new_ride.seats,
            driver_name: new_ride.driver_name.clone(),
            phone: new_ride.phone.clone(),
            notes: new_ride.notes.clone(),
            is_recurring: new_ride.is_recurring,
            recurring_days: new_ride.recurring_days.clone(),
            owner_id: new_ride.owner_id.clone(),
            created_at: new_ride.created_at.clone(),
        };

        let mut rows = self.rows.write().await;
        rows.push(row.clone());
        Ok(row)
    }

    /// Delete a row by id, enforcing ownership like the real store's
    /// row policy: someone else's row looks like a missing row.
    pub async fn delete_ride(&self, ride_id: &str, owner_id: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| !(r.id == ride_id && r.owner_id == owner_id));

        if rows.len() == before {
            return Err(StoreError::RideNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, date: &str, time: &str, owner: &str) -> RideRow {
        RideRow {
            id: id.to_string(),
            kind: "offer".to_string(),
            origin: "מעלה עמוס".to_string(),
            destination: "ירושלים".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            seats: 3,
            driver_name: "דוד".to_string(),
            phone: "050-1234567".to_string(),
            notes: None,
            is_recurring: false,
            recurring_days: vec![],
            owner_id: owner.to_string(),
            created_at: "2024-01-01T06:00:00Z".to_string(),
        }
    }

    fn new_row(date: &str, time: &str) -> NewRideRow {
        NewRideRow {
            kind: "request".to_string(),
            origin: "ביתר עילית".to_string(),
            destination: "מעלה עמוס".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            seats: 1,
            driver_name: "רחלי".to_string(),
            phone: "050-9999999".to_string(),
            notes: None,
            is_recurring: false,
            recurring_days: vec![],
            owner_id: "u2".to_string(),
            created_at: "2024-01-01T07:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn list_returns_rows_ordered_by_date_then_time() {
        let store = MockRideStore::with_rows(vec![
            row("b", "2024-01-02", "07:00", "u1"),
            row("a", "2024-01-01", "18:00", "u1"),
            row("c", "2024-01-01", "08:00", "u1"),
        ]);

        let rows = store.list_rides().await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn create_assigns_ids_and_persists() {
        let store = MockRideStore::empty();

        let created = store.create_ride(&new_row("2024-01-01", "08:00"), "tok").await.unwrap();
        assert_eq!(created.id, "local-1");

        let created = store.create_ride(&new_row("2024-01-01", "09:00"), "tok").await.unwrap();
        assert_eq!(created.id, "local-2");

        assert_eq!(store.list_rides().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_enforces_ownership() {
        let store = MockRideStore::with_rows(vec![row("a", "2024-01-01", "08:00", "u1")]);

        // Someone else's delete looks like a missing row
        assert!(matches!(
            store.delete_ride("a", "u2").await,
            Err(StoreError::RideNotFound)
        ));
        assert_eq!(store.list_rides().await.unwrap().len(), 1);

        // The owner can delete
        store.delete_ride("a", "u1").await.unwrap();
        assert!(store.list_rides().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_row_is_not_found() {
        let store = MockRideStore::empty();
        assert!(matches!(
            store.delete_ride("nope", "u1").await,
            Err(StoreError::RideNotFound)
        ));
    }

    #[tokio::test]
    async fn from_file_loads_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rides.json");

        let rows = vec![row("a", "2024-01-01", "08:00", "u1")];
        std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

        let store = MockRideStore::from_file(&path).unwrap();
        assert_eq!(store.list_rides().await.unwrap().len(), 1);
    }

    #[test]
    fn from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rides.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(MockRideStore::from_file(&path).is_err());
    }

    #[test]
    fn from_file_missing_file_errors() {
        assert!(MockRideStore::from_file("/definitely/not/here.json").is_err());
    }
}
