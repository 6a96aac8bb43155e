// Error types for the bet slip, the odds feed and configuration

use thiserror::Error;

/// Errors raised at the selection boundary.
///
/// The slip itself never fails: anything that reaches `BetSlip::add_selection`
/// has already been validated by one of the `Selection` constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlipError {
    #[error("invalid price {price}: decimal odds must be finite and greater than 1.0")]
    InvalidPrice { price: f64 },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("event {event_id} has no market '{market}'")]
    UnknownMarket { event_id: String, market: String },

    #[error("market '{market}' has no outcome '{outcome}'")]
    UnknownOutcome { market: String, outcome: String },

    #[error("event {0} not found")]
    UnknownEvent(u64),
}

/// Errors from fetching the odds catalog over HTTP.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("odds feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("odds feed returned {status} for {path}")]
    Status {
        path: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read odds fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode odds fixture: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Configuration errors with the offending variable named.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}
