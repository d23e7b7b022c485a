//! Axum route handlers for the Companies API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::access::ScopeQuery;
use crate::companies::filter::{distinct_industries, summarize, CompanyListQuery, CompanySummary};
use crate::companies::repository::{
    delete_company, get_company, insert_company, list_companies, update_company, CompanyPayload,
};
use crate::errors::AppError;
use crate::jobs::repository::list_jobs_for_company;
use crate::models::company::CompanyRow;
use crate::models::job::JobRow;
use crate::state::AppState;

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyListQuery>,
) -> Result<Json<Vec<CompanyRow>>, AppError> {
    let rows = list_companies(&state.db, params.office_scope()?).await?;
    Ok(Json(params.filter().apply(rows)))
}

/// GET /api/v1/companies/industries
pub async fn handle_list_industries(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let rows = list_companies(&state.db, params.office_scope()?).await?;
    Ok(Json(distinct_industries(&rows)))
}

/// GET /api/v1/companies/summary
pub async fn handle_company_summary(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<CompanySummary>, AppError> {
    let rows = list_companies(&state.db, params.office_scope()?).await?;
    Ok(Json(summarize(&rows)))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyRow>, AppError> {
    let company = get_company(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(company))
}

/// GET /api/v1/companies/:id/jobs
pub async fn handle_company_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs_for_company(&state.db, id).await?))
}

/// POST /api/v1/companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    Json(payload): Json<CompanyPayload>,
) -> Result<(StatusCode, Json<CompanyRow>), AppError> {
    payload.validate()?;
    let created = insert_company(&state.db, &payload.normalized()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/companies/:id
pub async fn handle_update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompanyPayload>,
) -> Result<Json<CompanyRow>, AppError> {
    payload.validate()?;
    let updated = update_company(&state.db, id, &payload.normalized())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(updated))
}

/// DELETE /api/v1/companies/:id
pub async fn handle_delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if delete_company(&state.db, id).await? {
        info!("Deleted company {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Company {id} not found")))
    }
}
