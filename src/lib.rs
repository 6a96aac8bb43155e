/// Sportsbook bet slip core
/// Odds catalog, bet slip state and payouts, plus the mock odds feed and
/// REST server the odds pages run against

pub mod app_state;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod slip;

pub use app_state::{AppState, SharedState};
pub use catalog::{
    count_secondary_outcomes, flatten_market, outcome_label, sort_for_board, Event, MarketNode,
    Markets, OddsBoard, Sport, SportSummary, TwoSidedMarket,
};
pub use config::ServerConfig;
pub use error::{ConfigError, FeedError, SlipError};
pub use feed::{generate_database, generate_odds, generate_with_seed, OddsClient, OddsDatabase};
pub use routes::router;
pub use slip::{combined_odds, parse_stake, BetSlip, OutcomeType, Selection, SlipQuote};
