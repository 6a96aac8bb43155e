// Routes module - assembles every HTTP endpoint into one router
// Odds catalog handlers live in `handlers`, bet slip sessions in `slips`

pub mod slips;

pub use slips::*;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::SharedState;
use crate::handlers::*;

/// Build the API router over `state`
pub fn router(state: SharedState) -> Router {
    Router::new()
        // ===== ODDS CATALOG =====
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/live", get(live_events))
        .route("/upcoming", get(upcoming_events))
        .route("/featured", get(featured_events))
        .route("/sports", get(list_sports))

        // ===== BET SLIP SESSIONS =====
        .route("/slips", post(create_slip))
        .route("/slips/:id", get(get_slip).delete(close_slip))
        .route("/slips/:id/selections", post(add_selection).delete(clear_slip))
        .route("/slips/:id/selections/:selection_id", delete(remove_selection))

        // ===== HEALTH CHECK =====
        .route("/", get(index))
        .route("/health", get(health_check))

        // The odds pages are served from another origin
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
