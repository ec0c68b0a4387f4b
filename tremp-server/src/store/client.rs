//! Ride store HTTP client.
//!
//! Talks to the hosted document store over its PostgREST-style interface.
//! List requests carry only the project API key; writes additionally carry
//! the signed-in user's bearer token, and the store's row policies enforce
//! real ownership server-side.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use super::error::StoreError;
use super::types::{NewRideRow, RideRow};

/// Path of the rides collection under the store base URL.
const RIDES_PATH: &str = "/rest/v1/rides";

/// Configuration for the ride store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL (e.g. "https://xyz.supabase.co")
    pub base_url: String,
    /// Project API key, sent as the `apikey` header
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Create a new config with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the hosted `rides` collection.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new store client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| StoreError::ApiError {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("apikey", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full ride snapshot, ordered by (date, time) ascending.
    ///
    /// The store keeps the ordering; callers get rows in feed-friendly
    /// order without sorting here.
    pub async fn list_rides(&self) -> Result<Vec<RideRow>, StoreError> {
        let url = format!("{}{}", self.base_url, RIDES_PATH);

        let response = self
            .http
            .get(&url)
            .query(&[("select", "*"), ("order", "date.asc,time.asc")])
            .send()
            .await?;

        let body = check_status(response).await?;

        let rows: Vec<RideRow> = serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
            body: Some(truncate(&body)),
        })?;

        debug!(count = rows.len(), "fetched ride snapshot");
        Ok(rows)
    }

    /// Create a ride on behalf of the signed-in user.
    ///
    /// Returns the created row (with its store-assigned id).
    pub async fn create_ride(
        &self,
        new_ride: &NewRideRow,
        user_token: &str,
    ) -> Result<RideRow, StoreError> {
        let url = format!("{}{}", self.base_url, RIDES_PATH);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, bearer(user_token)?)
            .header("Prefer", "return=representation")
            .json(new_ride)
            .send()
            .await?;

        let body = check_status(response).await?;

        // PostgREST returns the representation as a one-element array
        let mut rows: Vec<RideRow> = serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
            body: Some(truncate(&body)),
        })?;

        rows.pop().ok_or(StoreError::Json {
            message: "empty representation for created ride".to_string(),
            body: Some(truncate(&body)),
        })
    }

    /// Delete a ride by id on behalf of the signed-in user.
    ///
    /// The store's row policy only lets owners delete; a row that exists
    /// but belongs to someone else looks identical to a missing row, and
    /// both map to `RideNotFound`.
    pub async fn delete_ride(&self, ride_id: &str, user_token: &str) -> Result<(), StoreError> {
        let url = format!("{}{}", self.base_url, RIDES_PATH);

        let response = self
            .http
            .delete(&url)
            .query(&[("id", format!("eq.{ride_id}"))])
            .header(AUTHORIZATION, bearer(user_token)?)
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let body = check_status(response).await?;

        let deleted: Vec<RideRow> = serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
            body: Some(truncate(&body)),
        })?;

        if deleted.is_empty() {
            return Err(StoreError::RideNotFound);
        }

        debug!(ride_id, "deleted ride");
        Ok(())
    }
}

/// Build a bearer Authorization header value.
fn bearer(token: &str) -> Result<HeaderValue, StoreError> {
    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| StoreError::Unauthorized)
}

/// Map error statuses, returning the body text on success.
async fn check_status(response: reqwest::Response) -> Result<String, StoreError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(StoreError::Unauthorized);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::ApiError {
            status: status.as_u16(),
            message: truncate(&body),
        });
    }

    Ok(response.text().await?)
}

/// Cap error-payload echoes so a huge body doesn't flood the logs.
fn truncate(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StoreConfig::new("https://example.supabase.co", "key");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, "https://example.supabase.co");
    }

    #[test]
    fn bearer_header_format() {
        let value = bearer("tok123").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
    }

    #[test]
    fn bearer_rejects_control_characters() {
        assert!(bearer("bad\ntoken").is_err());
    }

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate("hello"), "hello");
    }

    #[test]
    fn truncate_long_body_capped() {
        let long = "x".repeat(2000);
        let out = truncate(&long);
        assert!(out.len() < 600);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "ירושלים".repeat(200);
        let out = truncate(&long);
        assert!(out.ends_with("..."));
    }
}
