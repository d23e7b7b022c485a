use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::pipeline::stage::{CandidateStatus, RecruitmentStage};
use crate::pipeline::transition::StageUpdater;
use crate::validation::Validator;

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub position: String,
    /// Defaults to `new` on create and to the stored status on update.
    pub status: Option<CandidateStatus>,
    pub cv_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Option<i16>,
    pub assigned_to: Option<Uuid>,
    pub office_id: Uuid,
}

impl CandidatePayload {
    pub fn validate(&self) -> Result<(), AppError> {
        Validator::new()
            .required("First name", &self.first_name)
            .required("Last name", &self.last_name)
            .required("Email", &self.email)
            .email("Email", &self.email)
            .required("Position", &self.position)
            .range("Rating", self.rating.map(i64::from), 1, 5)
            .finish()
    }
}

/// Candidates visible in `office`, newest first. `None` lists every office.
pub async fn list_candidates(
    pool: &PgPool,
    office: Option<Uuid>,
) -> Result<Vec<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>(
        r#"
        SELECT * FROM candidates
        WHERE ($1::uuid IS NULL OR office_id = $1)
        ORDER BY created_at DESC, id
        "#,
    )
    .bind(office)
    .fetch_all(pool)
    .await
}

pub async fn get_candidate(pool: &PgPool, id: Uuid) -> Result<Option<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_candidate(
    pool: &PgPool,
    payload: &CandidatePayload,
) -> Result<CandidateRow, sqlx::Error> {
    let status = payload.status.unwrap_or(CandidateStatus::New);
    let row = sqlx::query_as::<_, CandidateRow>(
        r#"
        INSERT INTO candidates
            (id, first_name, last_name, email, phone, position, status,
             cv_url, tags, rating, assigned_to, office_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.position)
    .bind(status.as_str())
    .bind(&payload.cv_url)
    .bind(&payload.tags)
    .bind(payload.rating)
    .bind(payload.assigned_to)
    .bind(payload.office_id)
    .fetch_one(pool)
    .await?;

    info!("Created candidate {} ({})", row.id, row.full_name());
    Ok(row)
}

pub async fn update_candidate(
    pool: &PgPool,
    id: Uuid,
    payload: &CandidatePayload,
) -> Result<Option<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>(
        r#"
        UPDATE candidates SET
            first_name = $2, last_name = $3, email = $4, phone = $5, position = $6,
            status = COALESCE($7, status), cv_url = $8, tags = $9, rating = $10,
            assigned_to = $11, office_id = $12, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(&payload.position)
    .bind(payload.status.map(|s| s.as_str()))
    .bind(&payload.cv_url)
    .bind(&payload.tags)
    .bind(payload.rating)
    .bind(payload.assigned_to)
    .bind(payload.office_id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no such candidate existed.
pub async fn delete_candidate(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn set_candidate_status(
    pool: &PgPool,
    id: Uuid,
    status: CandidateStatus,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE candidates SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

/// Persists pipeline moves by writing the stage's status onto the candidate row.
pub struct PgStageUpdater {
    pool: PgPool,
}

impl PgStageUpdater {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StageUpdater for PgStageUpdater {
    async fn update_stage(
        &self,
        candidate_id: Uuid,
        stage: RecruitmentStage,
    ) -> Result<(), AppError> {
        let status = CandidateStatus::for_stage(stage);
        if set_candidate_status(&self.pool, candidate_id, status).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Candidate {candidate_id} not found")))
        }
    }
}
