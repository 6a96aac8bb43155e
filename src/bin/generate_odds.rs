// Odds fixture generator
// Writes a fresh db.json for the mock odds server.
//
// Usage: generate-odds [OUTPUT] [SEED]
//   OUTPUT defaults to ODDS_FIXTURE or data/db.json, SEED to ODDS_SEED (random when unset)

use std::error::Error;
use std::path::PathBuf;
use tracing::info;

use sportsbook_betslip::{generate_with_seed, logging, ServerConfig};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_tracing();

    let config = ServerConfig::from_env()?;
    let mut args = std::env::args().skip(1);

    let output = args.next().map(PathBuf::from).unwrap_or(config.fixture_path);
    let seed = match args.next() {
        Some(raw) => Some(raw.parse::<u64>()?),
        None => config.seed,
    };

    let database = generate_with_seed(seed);
    database.save(&output)?;

    info!("✅ generated odds data");
    info!("   events:   {}", database.events.len());
    info!("   live:     {}", database.live.len());
    info!("   upcoming: {}", database.upcoming.len());
    info!("   featured: {}", database.featured.len());
    info!("   written to {}", output.display());
    Ok(())
}
