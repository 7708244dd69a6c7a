use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{request_id_middleware, request_span};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        // Questionnaire
        .route("/hearing/questions", get(handlers::get_questions))
        // Recommendations
        .route("/recommend", post(handlers::recommend))
        // Catalog
        .route("/sofas", get(handlers::get_sofas))
        .route("/sofas/:id", get(handlers::get_sofa))
        .route("/catalog/reload", post(handlers::reload_catalog))
}
