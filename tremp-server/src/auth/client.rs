//! Identity provider HTTP client.
//!
//! Verifies a user's bearer token against the hosted auth endpoint and
//! returns who they are. The board never sees credentials; sign-in happens
//! entirely in the hosted provider's popup, and we only ever hold the
//! resulting token.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::domain::UserId;

use super::error::AuthError;

/// Path of the user-info endpoint under the auth base URL.
const USER_PATH: &str = "/auth/v1/user";

/// Display name used when the provider has none for the user.
const FALLBACK_NAME: &str = "משתמש";

/// A verified, signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Opaque provider-assigned id; matches ride ownership.
    pub id: UserId,
    /// Display name for postings.
    pub name: String,
    /// Email, when the provider shares it.
    pub email: Option<String>,
}

/// Raw user-info response from the provider.
#[derive(Debug, Deserialize)]
struct UserDto {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadataDto,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadataDto {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl UserDto {
    fn into_user(self) -> AuthUser {
        let name = self
            .user_metadata
            .full_name
            .or(self.user_metadata.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());

        AuthUser {
            id: UserId::new(self.id),
            name,
            email: self.email,
        }
    }
}

/// Configuration for the identity client.
#[derive(Debug, Clone)]
pub struct AuthClientConfig {
    /// Project base URL (same project as the ride store)
    pub base_url: String,
    /// Project API key, sent as the `apikey` header
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AuthClientConfig {
    /// Create a new config with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }
}

/// Client for the hosted identity provider.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new identity client.
    pub fn new(config: AuthClientConfig) -> Result<Self, AuthError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| AuthError::Api {
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

    /// Verify a bearer token and return the user behind it.
    pub async fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let url = format!("{}{}", self.base_url, USER_PATH);

        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AuthError::Unauthorized)?;

        let response = self.http.get(&url).header(AUTHORIZATION, bearer).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AuthError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let dto: UserDto = serde_json::from_str(&body).map_err(|e| AuthError::Json {
            message: e.to_string(),
        })?;

        Ok(dto.into_user())
    }
}
