//! Axum route handlers for the Improvements API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::improvements::generator::generate_improvements;
use crate::models::analysis::ResumeAnalysisRow;
use crate::models::suggestion::Suggestion;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub parsed_resume: Value,
    pub analysis_result: Value,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub suggestions: Vec<Suggestion>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub analysis_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub analysis_id: Uuid,
    pub suggestions: Vec<Suggestion>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/improvements/preview
///
/// Runs the suggestion engine on an inline document and analysis without
/// touching the database. Useful for testing an analyzer's output shape.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let suggestions =
        generate_improvements(&state.llm, &request.analysis_result, &request.parsed_resume).await;

    Ok(Json(PreviewResponse {
        count: suggestions.len(),
        suggestions,
    }))
}

/// POST /api/v1/improvements/generate
///
/// Loads a stored resume analysis by id and returns improvement suggestions.
/// Rows whose parse or analysis step has not completed yield an empty list,
/// not an error — the engine's "empty in, empty out" contract holds here.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let row = sqlx::query_as::<_, ResumeAnalysisRow>(
        r#"
        SELECT id, resume_text, parsed_resume, analysis_result, created_at
        FROM resume_analyses
        WHERE id = $1
        "#,
    )
    .bind(request.analysis_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Analysis {} not found", request.analysis_id)))?;

    let parsed_resume = row.parsed_resume.unwrap_or(Value::Null);
    let analysis_result = row.analysis_result.unwrap_or(Value::Null);

    if parsed_resume.is_null() || analysis_result.is_null() {
        warn!(
            "Analysis {} is missing parsed_resume or analysis_result; returning no suggestions",
            row.id
        );
    }

    let suggestions = generate_improvements(&state.llm, &analysis_result, &parsed_resume).await;

    info!(
        "Generated {} suggestions for analysis {}",
        suggestions.len(),
        row.id
    );

    Ok(Json(GenerateResponse {
        analysis_id: row.id,
        count: suggestions.len(),
        suggestions,
    }))
}
