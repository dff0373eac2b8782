//! Import, export and preview endpoints

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/import
/// Body is the raw JSON text: one record object or an array of records
pub async fn import(State(state): State<AppState>, body: String) -> Result<Json<ImportResponse>> {
    let records = mcq_core::parse_mcq_json(&body)?;
    let inputs: Vec<McqInput> = records.into_iter().map(McqInput::from).collect();

    let created = state.db.import_mcqs(&inputs).await?;

    Ok(Json(ImportResponse {
        imported: created.len(),
        mcqs: created.iter().map(DbMcq::to_view).collect(),
    }))
}

/// GET /api/export
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let records = state.db.export_mcqs().await?;
    let body = mcq_core::to_mcq_json(&records).map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Exported {} MCQs", records.len());
    Ok(([(CONTENT_TYPE, "application/json")], body))
}

/// POST /api/preview
/// Parses raw markdown without storing anything
pub async fn preview(body: String) -> Json<ParsedMcq> {
    let parsed = mcq_core::parse(&body);
    if parsed.is_empty() {
        tracing::debug!("Preview of {} bytes found no question, options or explanation", body.len());
    }
    Json(parsed)
}
