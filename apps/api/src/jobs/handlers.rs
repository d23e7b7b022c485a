use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::access::{office_scope, Role};
use crate::errors::AppError;
use crate::jobs::repository::{filter_by_status, list_jobs};
use crate::models::job::{JobRow, JobStatus};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    pub role: Option<Role>,
    pub office_id: Option<Uuid>,
    pub status: Option<JobStatus>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let office = office_scope(params.role, params.office_id)?;
    let jobs = list_jobs(&state.db, office).await?;
    Ok(Json(filter_by_status(jobs, params.status)))
}
