// Bet slip routes
// Each session owns one slip; selections are built from the served catalog,
// so prices and labels always match what the odds endpoints return.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::app_state::SharedState;
use crate::error::SlipError;
use crate::handlers::lock_state;
use crate::models::*;
use crate::slip::Selection;

fn unknown_slip(id: Uuid) -> ApiError {
    api_error(StatusCode::NOT_FOUND, format!("bet slip {} not found", id))
}

fn invalid_selection(e: SlipError) -> ApiError {
    warn!(error = %e, "rejected selection");
    api_error(StatusCode::BAD_REQUEST, e.to_string())
}

/// POST /slips
pub async fn create_slip(
    State(state): State<SharedState>,
) -> Result<(StatusCode, Json<SlipResponse>), ApiError> {
    let mut app_state = lock_state(&state)?;
    let id = app_state.create_slip().ok_or_else(|| {
        api_error(StatusCode::SERVICE_UNAVAILABLE, "too many open bet slips")
    })?;
    let slip = app_state.slip(&id).ok_or_else(|| unknown_slip(id))?;
    Ok((StatusCode::CREATED, Json(SlipResponse::new(id, slip, ""))))
}

/// GET /slips/:id?stake=
pub async fn get_slip(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlipQuery>,
) -> Result<Json<SlipResponse>, ApiError> {
    let app_state = lock_state(&state)?;
    let slip = app_state.slip(&id).ok_or_else(|| unknown_slip(id))?;
    Ok(Json(SlipResponse::new(
        id,
        slip,
        query.stake.as_deref().unwrap_or(""),
    )))
}

/// POST /slips/:id/selections
/// Adds the outcome, replacing any earlier pick on the same event
pub async fn add_selection(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddSelectionRequest>,
) -> Result<Json<SlipResponse>, ApiError> {
    let mut app_state = lock_state(&state)?;
    if app_state.slip(&id).is_none() {
        return Err(unknown_slip(id));
    }

    let event = app_state
        .event(request.event_id)
        .ok_or(SlipError::UnknownEvent(request.event_id))
        .map_err(invalid_selection)?;
    let selection = Selection::from_event(event, &request.market_key, &request.outcome_key)
        .map_err(invalid_selection)?;

    info!(
        slip_id = %id,
        selection = selection.id(),
        price = selection.price(),
        "🎟️ selection added"
    );

    let slip = app_state.slip_mut(&id).ok_or_else(|| unknown_slip(id))?;
    slip.add_selection(selection);
    Ok(Json(SlipResponse::new(id, slip, "")))
}

/// DELETE /slips/:id/selections/:selection_id
/// Removing a selection that is not on the slip is a no-op
pub async fn remove_selection(
    State(state): State<SharedState>,
    Path((id, selection_id)): Path<(Uuid, String)>,
) -> Result<Json<SlipResponse>, ApiError> {
    let mut app_state = lock_state(&state)?;
    let slip = app_state.slip_mut(&id).ok_or_else(|| unknown_slip(id))?;
    slip.remove_selection(&selection_id);
    Ok(Json(SlipResponse::new(id, slip, "")))
}

/// DELETE /slips/:id/selections
/// Clears the slip; the session stays open
pub async fn clear_slip(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SlipResponse>, ApiError> {
    let mut app_state = lock_state(&state)?;
    let slip = app_state.slip_mut(&id).ok_or_else(|| unknown_slip(id))?;
    slip.clear();
    Ok(Json(SlipResponse::new(id, slip, "")))
}

/// DELETE /slips/:id
/// Ends the session; later requests for it are 404
pub async fn close_slip(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut app_state = lock_state(&state)?;
    if app_state.close_slip(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(unknown_slip(id))
    }
}
