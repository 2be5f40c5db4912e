mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::setup_cors(&config)?;

    let router = server::router::router()
        .with_state(AppState::new(db, config.roster_limits))
        .layer(cors);

    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Starting server on {} (limits: {} starters, {} substitutes, {} preselected)",
        addr,
        config.roster_limits.starter,
        config.roster_limits.substitute,
        config.roster_limits.preselected
    );

    axum::serve(listener, router).await?;

    Ok(())
}
