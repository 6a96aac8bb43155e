// Sportsbook odds server - Main Entry Point
// Serves the odds catalog and bet slip sessions over REST

use std::error::Error;
use tracing::{error, info};

use sportsbook_betslip::{logging, router, AppState, OddsDatabase, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_tracing();

    let config = ServerConfig::from_env()?;
    let database = OddsDatabase::load_or_generate(&config.fixture_path, config.seed)?;
    let state = AppState::new(database).into_shared();
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🚀 odds server listening on http://{}", addr);
    info!("📋 GET /events /events/:id /live /upcoming /featured /sports");
    info!("🧾 POST /slips, GET|DELETE /slips/:id, POST|DELETE /slips/:id/selections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("🛑 shutdown signal received");
}
