mod model;
mod server;

use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    middleware::auth::ServiceKey,
    model::bank::LedgerLimits,
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::setup_cors(&config)?;

    if config.service_api_key.expose_secret().len() < 16 {
        tracing::warn!("BANK_SERVICE_API_KEY is shorter than 16 characters");
    }

    let state = AppState::new(
        db,
        ServiceKey::new(config.service_api_key),
        LedgerLimits::new(config.max_amount),
    );

    let mut app = router::router(state.clone())
        .with_state(state)
        .layer(session);

    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Starting server on {} (max amount {})",
        config.bind_address,
        config.max_amount
    );

    axum::serve(listener, app).await?;

    Ok(())
}
