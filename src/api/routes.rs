//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    body::Bytes,
    extract::State,
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::deserialize_optional_date;
use crate::domain::{DateRange, Event, EventPatch, NewEvent};
use crate::error::{AppError, AppResult};

use super::validation::{decode_json_body, parse_query_params};
use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

/// Body of `POST /create_event`. Omitted fields are left for business
/// validation to reject.
///
/// The body has the shape of a stored [`Event`]; `id`, `created_at` and
/// `updated_at` are accepted but ignored, since the store assigns them.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /update_event`; absent fields keep their stored values.
///
/// An event returned by a query can be edited and posted back as is;
/// its `created_at` and `updated_at` are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /delete_event`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteEventRequest {
    #[serde(default)]
    pub id: i64,
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    fn new(result: impl Into<String>) -> Json<Self> {
        Json(Self {
            result: result.into(),
        })
    }
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        NewEvent {
            user_id: request.user_id,
            title: request.title,
            date: request.date,
        }
    }
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(request: UpdateEventRequest) -> Self {
        EventPatch {
            id: request.id,
            user_id: request.user_id,
            title: request.title,
            date: request.date,
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
///
/// Each path accepts one method; anything else gets `{"error": "wrong method"}`.
/// `get` would also answer HEAD, so HEAD is routed to the rejection explicitly.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/create_event", post(create_event).fallback(wrong_method))
        .route("/update_event", post(update_event).fallback(wrong_method))
        .route("/delete_event", post(delete_event).fallback(wrong_method))
        .route(
            "/events_for_day",
            get(events_for_day).head(wrong_method).fallback(wrong_method),
        )
        .route(
            "/events_for_week",
            get(events_for_week).head(wrong_method).fallback(wrong_method),
        )
        .route(
            "/events_for_month",
            get(events_for_month).head(wrong_method).fallback(wrong_method),
        )
}

async fn wrong_method() -> AppError {
    AppError::WrongMethod
}

// =========================================================================
// POST handlers
// =========================================================================

async fn create_event(State(store): State<AppState>, body: Bytes) -> AppResult<Json<ResultResponse>> {
    let request: CreateEventRequest = decode_json_body(&body)?;

    let id = store.add_event(request.into())?;

    Ok(ResultResponse::new(format!("created, id={}", id)))
}

async fn update_event(State(store): State<AppState>, body: Bytes) -> AppResult<Json<ResultResponse>> {
    let request: UpdateEventRequest = decode_json_body(&body)?;

    store.update_event(request.into())?;

    Ok(ResultResponse::new("updated"))
}

async fn delete_event(State(store): State<AppState>, body: Bytes) -> AppResult<Json<ResultResponse>> {
    let request: DeleteEventRequest = decode_json_body(&body)?;

    if request.id < 1 {
        return Err(AppError::InvalidId(request.id));
    }

    store.delete_event(request.id)?;

    Ok(ResultResponse::new("deleted"))
}

// =========================================================================
// GET handlers
// =========================================================================

async fn events_for_day(State(store): State<AppState>, uri: Uri) -> AppResult<Json<Vec<Event>>> {
    let params = parse_query_params(&uri)?;

    tracing::debug!(user_id = params.user_id, date = %params.day(), "Events for day");

    Ok(Json(store.get_events_by_date(params.date)))
}

async fn events_for_week(State(store): State<AppState>, uri: Uri) -> AppResult<Json<Vec<Event>>> {
    let params = parse_query_params(&uri)?;

    tracing::debug!(user_id = params.user_id, date = %params.day(), "Events for week");

    let week = DateRange::week_of(params.day());

    Ok(Json(store.get_events_for_range(week.start, week.end)))
}

async fn events_for_month(State(store): State<AppState>, uri: Uri) -> AppResult<Json<Vec<Event>>> {
    let params = parse_query_params(&uri)?;

    tracing::debug!(user_id = params.user_id, date = %params.day(), "Events for month");

    let month = DateRange::month_of(params.day());

    Ok(Json(store.get_events_for_range(month.start, month.end)))
}
