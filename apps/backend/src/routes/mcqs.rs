//! MCQ CRUD endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/mcqs
pub async fn list(State(state): State<AppState>) -> Result<Json<McqListResponse>> {
    let mcqs: Vec<McqView> = state
        .db
        .list_mcqs()
        .await?
        .iter()
        .map(DbMcq::to_view)
        .collect();

    Ok(Json(McqListResponse {
        total: mcqs.len(),
        mcqs,
    }))
}

/// GET /api/mcqs/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<McqView>> {
    let mcq = state
        .db
        .get_mcq(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(mcq.to_view()))
}

/// POST /api/mcqs
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<McqRequest>,
) -> Result<Json<McqView>> {
    let input = request.validate()?;
    let mcq = state.db.create_mcq(&input).await?;
    Ok(Json(mcq.to_view()))
}

/// PUT /api/mcqs/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<McqRequest>,
) -> Result<Json<McqView>> {
    let input = request.validate()?;
    let mcq = state
        .db
        .update_mcq(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(mcq.to_view()))
}

/// DELETE /api/mcqs/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    if !state.db.delete_mcq(id).await? {
        return Err(not_found(id));
    }

    tracing::info!("Deleted MCQ {}", id);
    Ok(Json(DeleteResponse { deleted: true }))
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("MCQ {}", id))
}
