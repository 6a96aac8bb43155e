// ============================================================================
// Feed Module - Mock Odds Feed & HTTP Client
// ============================================================================
//
// Produces the odds catalog served by the mock REST server, and reads it
// back over HTTP the way the odds pages do.
//
//   - generator: seedable synthetic fixture (`db.json`)
//   - client:    reqwest client for the odds REST endpoints
//
// ============================================================================

pub mod client;
pub mod generator;

pub use client::*;
pub use generator::*;
