use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{Answers, Item, Questionnaire, RecommendationResult};
use crate::services::recommend_with_relaxation;

use super::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub items: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SofasResponse {
    pub sofas: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct SofaResponse {
    pub sofa: Item,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub items: usize,
    pub questions: usize,
    pub loaded_at: DateTime<Utc>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.snapshot().await;
    Json(HealthResponse {
        status: "healthy",
        items: snapshot.items.len(),
        loaded_at: snapshot.loaded_at,
    })
}

/// Hearing questionnaire
pub async fn get_questions(State(state): State<AppState>) -> Json<Questionnaire> {
    let snapshot = state.snapshot().await;
    Json(snapshot.questionnaire.clone())
}

/// Parses a recommendation body; an empty body means no answers at all
fn parse_answers(body: &[u8]) -> AppResult<Answers> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Answers::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("Malformed answers: {}", e)))
}

/// Ranked recommendations for one set of answers
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> AppResult<Json<RecommendationResult>> {
    let answers = parse_answers(&body)?;
    let snapshot = state.snapshot().await;

    let result = recommend_with_relaxation(&snapshot.items, &answers);

    tracing::info!(
        request_id = %request_id,
        catalog_size = snapshot.items.len(),
        result_count = result.results.len(),
        relaxed = result.relaxed,
        "Recommendation served"
    );

    Ok(Json(result))
}

/// Whole catalog, in catalog order
pub async fn get_sofas(State(state): State<AppState>) -> Json<SofasResponse> {
    let snapshot = state.snapshot().await;
    Json(SofasResponse {
        sofas: snapshot.items.clone(),
    })
}

/// One catalog item by id
pub async fn get_sofa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SofaResponse>> {
    let snapshot = state.snapshot().await;
    let sofa = snapshot
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Sofa {} not found", id)))?;
    Ok(Json(SofaResponse { sofa }))
}

/// Re-reads the catalog source and swaps in the new snapshot
pub async fn reload_catalog(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<ReloadResponse>> {
    let snapshot = state.reload().await?;

    tracing::info!(
        request_id = %request_id,
        items = snapshot.items.len(),
        "Catalog reloaded"
    );

    Ok(Json(ReloadResponse {
        items: snapshot.items.len(),
        questions: snapshot.questionnaire.questions.len(),
        loaded_at: snapshot.loaded_at,
    }))
}
