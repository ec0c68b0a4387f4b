//! Token verification cache.
//!
//! Every write request carries a bearer token, and the same user posts or
//! deletes several times in a session. Verified tokens are cached for a
//! few minutes, keyed by the token itself; the TTL keeps a revoked token
//! from living here much longer than the provider would allow anyway.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::client::{AuthClient, AuthUser};
use super::error::AuthError;

/// Configuration for the token cache.
#[derive(Debug, Clone)]
pub struct AuthCacheConfig {
    /// TTL for verified tokens.
    pub ttl: Duration,

    /// Maximum number of cached tokens.
    pub max_capacity: u64,
}

impl Default for AuthCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Identity client with token caching.
pub struct CachedAuthClient {
    client: AuthClient,
    tokens: MokaCache<String, AuthUser>,
}

impl CachedAuthClient {
    /// Create a new cached identity client.
    pub fn new(client: AuthClient, config: &AuthCacheConfig) -> Self {
        let tokens = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, tokens }
    }

    /// Verify a bearer token, from cache when recently seen.
    ///
    /// Only successful verifications are cached; failures always hit the
    /// provider again.
    pub async fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        if let Some(user) = self.tokens.get(token).await {
            return Ok(user);
        }

        let user = self.client.verify(token).await?;
        self.tokens.insert(token.to_string(), user.clone()).await;
        Ok(user)
    }
}
