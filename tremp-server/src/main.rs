use std::net::SocketAddr;
use std::sync::Arc;

use tremp_server::auth::{
    AuthCacheConfig, AuthClient, AuthClientConfig, Authenticator, CachedAuthClient,
};
use tremp_server::cache::{CacheConfig, CachedRideStore};
use tremp_server::email::sample_requests;
use tremp_server::schedules::{BusSchedules, maale_amos_lines};
use tremp_server::store::{MockRideStore, RideSource, StoreClient, StoreConfig};
use tremp_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tremp_server=info".into()),
        )
        .init();

    // Hosted project credentials; without them the board runs on bundled
    // demo data so local development needs no account at all.
    let store_url = std::env::var("TREMP_STORE_URL").ok();
    let store_key = std::env::var("TREMP_STORE_KEY").ok();

    let (rides, auth) = match (store_url, store_key) {
        (Some(url), Some(key)) => {
            let store_config = StoreConfig::new(&url, &key);
            let store_client = StoreClient::new(store_config).expect("Failed to create store client");
            let cached_store = CachedRideStore::new(store_client, &CacheConfig::default());

            let auth_config = AuthClientConfig::new(&url, &key);
            let auth_client = AuthClient::new(auth_config).expect("Failed to create auth client");
            let cached_auth = CachedAuthClient::new(auth_client, &AuthCacheConfig::default());

            (
                RideSource::Remote(Arc::new(cached_store)),
                Authenticator::Remote(cached_auth),
            )
        }
        _ => {
            eprintln!("Warning: TREMP_STORE_URL / TREMP_STORE_KEY not set. Running in demo mode.");
            (
                RideSource::Local(MockRideStore::empty()),
                Authenticator::demo(),
            )
        }
    };

    // Bus timetable: a JSON override, or the bundled Ma'ale Amos lines
    let schedules = match std::env::var("TREMP_SCHEDULES_FILE") {
        Ok(path) => BusSchedules::load_file(&path)
            .unwrap_or_else(|e| panic!("Failed to load schedules from {path}: {e}")),
        Err(_) => maale_amos_lines(),
    };
    println!("Loaded {} bus lines", schedules.len());

    // Build app state
    let state = AppState::new(rides, auth, schedules, sample_requests());

    // Create router
    let static_dir = std::env::var("TREMP_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr: SocketAddr = std::env::var("TREMP_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("Invalid TREMP_BIND_ADDR");

    println!("Tremp board listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the board.");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health      - Health check");
    println!("  GET    /feed        - Merged transport feed (JSON or HTML)");
    println!("  GET    /email       - Email-derived ride requests");
    println!("  POST   /rides       - Post a ride (bearer token required)");
    println!("  DELETE /rides/:id   - Delete your ride (bearer token required)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
