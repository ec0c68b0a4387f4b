//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{Local, NaiveDate, Timelike, Utc};
use tower_http::services::ServeDir;

use crate::auth::{AuthError, AuthUser};
use crate::domain::{DayTime, RideKind, TimeRange, WeekdaySet};
use crate::email::filter_requests;
use crate::feed::{DestinationFilter, FeedFilter, build_feed};
use crate::store::{NewRideRow, StoreError, ride_from_row};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/feed", get(get_feed))
        .route("/email", get(get_email_requests))
        .route("/rides", post(create_ride))
        .route("/rides/:id", delete(delete_ride))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board page.
async fn index_page() -> IndexTemplate {
    let today = Local::now().date_naive();
    IndexTemplate {
        date_label: hebrew_date_label(today),
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verify the caller's token, or fail with 401.
async fn require_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<(AuthUser, String), AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized {
        message: "sign in to post or delete rides".to_string(),
    })?;

    let user = state.auth.verify(token).await?;
    Ok((user, token.to_string()))
}

/// Resolve the feed filter from query parameters.
///
/// Defaults reproduce the board's initial view: all destinations, today,
/// from the current time until end of day.
fn resolve_filter(query: &FeedQuery, now: DayTime, today: NaiveDate) -> Result<FeedFilter, AppError> {
    let destination = DestinationFilter::parse(query.dest.as_deref().unwrap_or(""));

    let date = match &query.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError::BadRequest {
                message: format!("Invalid date: {raw}"),
            }
        })?,
        None => today,
    };

    let start = match &query.start {
        Some(raw) => DayTime::parse(raw).map_err(|e| AppError::BadRequest {
            message: format!("Invalid start time: {e}"),
        })?,
        None => now,
    };

    let end = match &query.end {
        Some(raw) => DayTime::parse(raw).map_err(|e| AppError::BadRequest {
            message: format!("Invalid end time: {e}"),
        })?,
        None => DayTime::parse("23:59").expect("literal is valid"),
    };

    let window = TimeRange::new(start, end).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    Ok(FeedFilter::new(destination, date, window))
}

/// The merged transport feed.
async fn get_feed(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    let local_now = Local::now();
    let now = DayTime::from_hm(local_now.time().hour(), local_now.time().minute())
        .expect("clock components are in range");

    let filter = resolve_filter(&query, now, local_now.date_naive())?;

    let rides = state.rides.snapshot().await?;
    let items = build_feed(&rides, state.schedules.lines(), &filter);

    if accepts_html(&headers) {
        let views: Vec<FeedItemView> = items
            .iter()
            .map(|item| FeedItemView::from_item(item, now))
            .collect();

        let template = FeedItemsTemplate {
            items: views,
            start: filter.window.start().to_string(),
            end: filter.window.end().to_string(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results: Vec<FeedItemResult> = items
            .iter()
            .map(|item| FeedItemResult::from_item(item, now))
            .collect();

        Ok(Json(FeedResponse {
            date: filter.date.format("%Y-%m-%d").to_string(),
            date_label: hebrew_date_label(filter.date),
            start: filter.window.start().to_string(),
            end: filter.window.end().to_string(),
            items: results,
        })
        .into_response())
    }
}

/// Email-derived ride requests, filtered by destination.
async fn get_email_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EmailQuery>,
) -> Result<Response, AppError> {
    let filter = DestinationFilter::parse(query.dest.as_deref().unwrap_or(""));
    let matching = filter_requests(&state.email_requests, &filter);

    if accepts_html(&headers) {
        let views: Vec<EmailView> = matching.iter().map(|r| EmailView::from_request(r)).collect();

        let template = EmailListTemplate { requests: views };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let requests: Vec<EmailRequestResult> = matching
            .iter()
            .map(|r| EmailRequestResult::from_request(r))
            .collect();

        Ok(Json(EmailListResponse { requests }).into_response())
    }
}

/// Create a ride posting for the signed-in user.
async fn create_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateRideRequest>,
) -> Result<Response, AppError> {
    let (user, token) = require_user(&state, &headers).await?;

    // Validate through the domain constructors before touching the store
    RideKind::parse(&request.kind).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
        message: format!("Invalid date: {}", request.date),
    })?;
    DayTime::parse(&request.time).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    WeekdaySet::from_indices(&request.recurring_days).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    if request.origin.trim().is_empty() || request.destination.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "origin and destination are required".to_string(),
        });
    }
    if request.phone.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "a contact phone is required".to_string(),
        });
    }

    let driver_name = request
        .driver_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| user.name.clone());

    let new_row = NewRideRow {
        kind: request.kind,
        origin: request.origin,
        destination: request.destination,
        date: request.date,
        time: request.time,
        seats: request.seats,
        driver_name,
        phone: request.phone,
        notes: request.notes.filter(|n| !n.trim().is_empty()),
        is_recurring: request.is_recurring,
        recurring_days: if request.is_recurring {
            request.recurring_days
        } else {
            Vec::new()
        },
        owner_id: user.id.as_str().to_string(),
        created_at: Utc::now().to_rfc3339(),
    };

    let created = state.rides.create_ride(&new_row, &token).await?;

    let ride = ride_from_row(&created).map_err(|e| AppError::Internal {
        message: format!("store returned a malformed ride: {e}"),
    })?;

    Ok((StatusCode::CREATED, Json(RideResult::from_ride(&ride))).into_response())
}

/// Delete a ride owned by the signed-in user.
///
/// Accepts either the raw store id or the feed identity ("ride-{id}").
async fn delete_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let (user, token) = require_user(&state, &headers).await?;

    let store_id = id.strip_prefix("ride-").unwrap_or(&id);

    state.rides.delete_ride(store_id, &token, &user.id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RideNotFound => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::Unauthorized => AppError::Unauthorized {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized => AppError::Unauthorized {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(%status, message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
