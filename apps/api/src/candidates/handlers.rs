//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::access::ScopeQuery;
use crate::candidates::filter::{distinct_positions, CandidateListQuery};
use crate::candidates::repository::{
    delete_candidate, get_candidate, insert_candidate, list_candidates, update_candidate,
    CandidatePayload,
};
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::pipeline::stage::RecruitmentStage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StageChangeRequest {
    pub stage: RecruitmentStage,
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let filter = params.filter()?;
    let rows = list_candidates(&state.db, params.office_scope()?).await?;
    Ok(Json(filter.apply(rows)))
}

/// GET /api/v1/candidates/positions
pub async fn handle_list_positions(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let rows = list_candidates(&state.db, params.office_scope()?).await?;
    Ok(Json(distinct_positions(&rows)))
}

/// GET /api/v1/candidates/:id
///
/// Card selection on the board resolves through here.
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateRow>, AppError> {
    let candidate = get_candidate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidatePayload>,
) -> Result<(StatusCode, Json<CandidateRow>), AppError> {
    payload.validate()?;
    let created = insert_candidate(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CandidatePayload>,
) -> Result<Json<CandidateRow>, AppError> {
    payload.validate()?;
    let updated = update_candidate(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if delete_candidate(&state.db, id).await? {
        info!("Deleted candidate {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Candidate {id} not found")))
    }
}

/// PATCH /api/v1/candidates/:id/stage
///
/// Direct stage edit from the detail form. Unlike a board drop, this waits for the
/// update and reports its failure.
pub async fn handle_change_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StageChangeRequest>,
) -> Result<Json<CandidateRow>, AppError> {
    state.stage_updater.update_stage(id, req.stage).await?;
    let candidate = get_candidate(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}
