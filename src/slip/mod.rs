// ============================================================================
// Slip Module - Bet Slip State & Payout Aggregation
// ============================================================================
//
// The bet slip is the set of selections a user has clicked on odds boards.
//
// Core Invariant:
//   At most one selection per event. Picking another outcome of the same
//   event replaces the previous pick in a single call, so an odds board never
//   sees both (or neither) buttons highlighted.
//
//   - selection: one chosen outcome, validated at construction
//   - store:     the slip itself (add / remove / toggle / clear / query)
//   - payout:    combined odds, stake parsing and the displayed quote
//
// ============================================================================

pub mod payout;
pub mod selection;
pub mod store;

pub use payout::*;
pub use selection::*;
pub use store::*;
