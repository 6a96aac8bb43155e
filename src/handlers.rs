// HTTP request handlers for the odds catalog

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::MutexGuard;
use tracing::{debug, error};

use crate::app_state::{AppState, SharedState};
use crate::catalog::{Event, SportSummary};
use crate::models::*;

/// Lock the shared state; a poisoned lock is a 500 rather than a panic
pub(crate) fn lock_state(state: &SharedState) -> Result<MutexGuard<'_, AppState>, ApiError> {
    state.lock().map_err(|_| {
        error!("app state lock poisoned");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "state unavailable")
    })
}

// ===== EVENTS =====

/// GET /events?sport=&q=&_page=&_limit=
pub async fn list_events(
    State(state): State<SharedState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let app_state = lock_state(&state)?;

    let matching = app_state
        .database
        .events
        .iter()
        .filter(|event| query.sport.map_or(true, |sport| event.sport == sport))
        .filter(|event| query.q.as_deref().map_or(true, |q| event.matches_query(q)));

    let events: Vec<Event> = match query.window() {
        Some((skip, take)) => matching.skip(skip).take(take).cloned().collect(),
        None => matching.cloned().collect(),
    };

    debug!(?query, count = events.len(), "listed events");
    Ok(Json(events))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Event>, ApiError> {
    let app_state = lock_state(&state)?;
    app_state
        .event(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("event {} not found", id)))
}

/// GET /live
pub async fn live_events(State(state): State<SharedState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(lock_state(&state)?.database.live.clone()))
}

/// GET /upcoming
pub async fn upcoming_events(State(state): State<SharedState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(lock_state(&state)?.database.upcoming.clone()))
}

/// GET /featured
pub async fn featured_events(State(state): State<SharedState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(lock_state(&state)?.database.featured.clone()))
}

/// GET /sports
pub async fn list_sports(State(state): State<SharedState>) -> Result<Json<Vec<SportSummary>>, ApiError> {
    Ok(Json(lock_state(&state)?.database.sports.clone()))
}

// ===== SERVICE INFO =====

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /events", "GET /events/:id", "GET /live", "GET /upcoming",
            "GET /featured", "GET /sports", "GET /health",
            "POST /slips", "GET /slips/:id", "POST /slips/:id/selections",
            "DELETE /slips/:id/selections/:selection_id", "DELETE /slips/:id/selections",
            "DELETE /slips/:id"
        ]
    }))
}

/// GET /health
pub async fn health_check(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let app_state = lock_state(&state)?;
    Ok(Json(json!({
        "status": "ok",
        "events": app_state.database.events.len(),
        "sessions": app_state.slips.len(),
    })))
}
