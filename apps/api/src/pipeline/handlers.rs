//! Axum route handlers for the pipeline board and drag/drop transitions.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidates::filter::CandidateListQuery;
use crate::candidates::repository::list_candidates;
use crate::errors::AppError;
use crate::pipeline::board::{build_board, BoardColumn};
use crate::pipeline::stage::RecruitmentStage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BeginTransitionRequest {
    pub candidate_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct BeginTransitionResponse {
    pub pending: Uuid,
    /// Candidate whose unfinished move was dropped by this call.
    pub discarded: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteTransitionRequest {
    pub stage: RecruitmentStage,
}

#[derive(Debug, Serialize)]
pub struct CompleteTransitionResponse {
    /// False when no move was pending.
    pub dispatched: bool,
}

/// GET /api/v1/pipeline
pub async fn handle_get_board(
    State(state): State<AppState>,
    Query(params): Query<CandidateListQuery>,
) -> Result<Json<Vec<BoardColumn>>, AppError> {
    let filter = params.filter()?;
    let rows = list_candidates(&state.db, params.office_scope()?).await?;
    Ok(Json(build_board(&filter.apply(rows))))
}

#[derive(Debug, Serialize)]
pub struct PendingTransitionResponse {
    pub pending: Option<Uuid>,
}

/// GET /api/v1/pipeline/transition
pub async fn handle_get_transition(State(state): State<AppState>) -> Json<PendingTransitionResponse> {
    Json(PendingTransitionResponse {
        pending: state.transitions.pending(),
    })
}

/// POST /api/v1/pipeline/transition/begin
pub async fn handle_begin_transition(
    State(state): State<AppState>,
    Json(req): Json<BeginTransitionRequest>,
) -> Json<BeginTransitionResponse> {
    let discarded = state.transitions.begin_transition(req.candidate_id);
    Json(BeginTransitionResponse {
        pending: req.candidate_id,
        discarded,
    })
}

/// POST /api/v1/pipeline/transition/complete
///
/// Returns as soon as the update is dispatched; the board must be re-fetched to see it.
pub async fn handle_complete_transition(
    State(state): State<AppState>,
    Json(req): Json<CompleteTransitionRequest>,
) -> Json<CompleteTransitionResponse> {
    let dispatched = state.transitions.complete_transition(req.stage);
    Json(CompleteTransitionResponse { dispatched })
}

/// POST /api/v1/pipeline/transition/cancel
pub async fn handle_cancel_transition(State(state): State<AppState>) -> StatusCode {
    state.transitions.cancel_transition();
    StatusCode::NO_CONTENT
}
