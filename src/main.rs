use std::sync::Arc;

use sofa_match::{
    api::{create_router, AppState},
    config::Config,
    services::FileCatalogSource,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;

    // Initialize application state from the catalog files
    let source = Arc::new(FileCatalogSource::new(
        config.catalog_path.clone(),
        config.questions_path.clone(),
    ));
    let state = AppState::bootstrap(source).await;

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
