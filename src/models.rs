// Request and response models for the odds and bet slip API

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Sport;
use crate::slip::{BetSlip, Selection, SlipQuote};

/// Page size used when `_page` is given without `_limit`
pub const DEFAULT_PAGE_LIMIT: usize = 10;

// ===== ODDS QUERIES =====

/// Query string of `GET /events`
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub sport: Option<Sport>,

    /// Free-text search over teams, players, league and tournament
    pub q: Option<String>,

    /// 1-based page number
    #[serde(rename = "_page")]
    pub page: Option<usize>,

    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

impl EventsQuery {
    /// `(skip, take)` for the requested page, if any paging was asked for
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.page.is_none() && self.limit.is_none() {
            return None;
        }
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let page = self.page.unwrap_or(1).max(1);
        Some(((page - 1).saturating_mul(limit), limit))
    }
}

// ===== BET SLIP =====

#[derive(Debug, Default, Deserialize)]
pub struct SlipQuery {
    /// Raw stake text as typed; anything unparseable quotes as 0
    pub stake: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSelectionRequest {
    /// Numeric id of the event in the catalog
    pub event_id: u64,
    pub market_key: String,
    /// Flattened outcome key, e.g. `home` or `-2.5.home`
    pub outcome_key: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipResponse {
    pub slip_id: Uuid,
    pub selections: Vec<Selection>,
    pub quote: SlipQuote,
}

impl SlipResponse {
    pub fn new(slip_id: Uuid, slip: &BetSlip, stake_text: &str) -> Self {
        Self {
            slip_id,
            selections: slip.selections().to_vec(),
            quote: slip.quote(stake_text),
        }
    }
}

// ===== ERRORS =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every fallible handler
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window() {
        let none = EventsQuery::default();
        assert_eq!(none.window(), None);

        let page_two = EventsQuery {
            page: Some(2),
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(page_two.window(), Some((5, 5)));

        let page_only = EventsQuery {
            page: Some(3),
            ..Default::default()
        };
        assert_eq!(page_only.window(), Some((20, DEFAULT_PAGE_LIMIT)));

        let page_zero = EventsQuery {
            page: Some(0),
            limit: Some(4),
            ..Default::default()
        };
        assert_eq!(page_zero.window(), Some((0, 4)));
    }
}
