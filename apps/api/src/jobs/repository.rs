use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobRow, JobStatus};

pub async fn list_jobs(pool: &PgPool, office: Option<Uuid>) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        SELECT * FROM jobs
        WHERE ($1::uuid IS NULL OR office_id = $1)
        ORDER BY created_at DESC, id
        "#,
    )
    .bind(office)
    .fetch_all(pool)
    .await
}

pub async fn list_jobs_for_company(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
}

/// Keeps jobs in `status`, or all of them when no status is given.
pub fn filter_by_status(jobs: Vec<JobRow>, status: Option<JobStatus>) -> Vec<JobRow> {
    match status {
        Some(status) => jobs
            .into_iter()
            .filter(|j| j.status == status.as_str())
            .collect(),
        None => jobs,
    }
}
