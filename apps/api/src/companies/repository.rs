use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::validation::Validator;

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub industry: String,
    pub website: Option<String>,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub open_positions: i32,
    pub office_id: Uuid,
}

impl CompanyPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        Validator::new()
            .required("Company name", &self.name)
            .required("Industry", &self.industry)
            .required("Contact person", &self.contact_person)
            .required("Contact email", &self.contact_email)
            .email("Contact email", &self.contact_email)
            .phone("Contact phone", self.contact_phone.as_deref())
            .range("Open positions", Some(i64::from(self.open_positions)), 0, i64::from(i32::MAX))
            .finish()
    }

    /// Blank optional fields are stored as NULL.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.website,
            &mut self.contact_phone,
            &mut self.address,
            &mut self.notes,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

pub async fn list_companies(
    pool: &PgPool,
    office: Option<Uuid>,
) -> Result<Vec<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>(
        r#"
        SELECT * FROM companies
        WHERE ($1::uuid IS NULL OR office_id = $1)
        ORDER BY name ASC, id
        "#,
    )
    .bind(office)
    .fetch_all(pool)
    .await
}

pub async fn get_company(pool: &PgPool, id: Uuid) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_company(
    pool: &PgPool,
    payload: &CompanyPayload,
) -> Result<CompanyRow, sqlx::Error> {
    let row = sqlx::query_as::<_, CompanyRow>(
        r#"
        INSERT INTO companies
            (id, name, industry, website, contact_person, contact_email,
             contact_phone, address, notes, open_positions, office_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.industry)
    .bind(&payload.website)
    .bind(&payload.contact_person)
    .bind(&payload.contact_email)
    .bind(&payload.contact_phone)
    .bind(&payload.address)
    .bind(&payload.notes)
    .bind(payload.open_positions)
    .bind(payload.office_id)
    .fetch_one(pool)
    .await?;

    info!("Created company {} ({})", row.id, row.name);
    Ok(row)
}

pub async fn update_company(
    pool: &PgPool,
    id: Uuid,
    payload: &CompanyPayload,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>(
        r#"
        UPDATE companies SET
            name = $2, industry = $3, website = $4, contact_person = $5,
            contact_email = $6, contact_phone = $7, address = $8, notes = $9,
            open_positions = $10, office_id = $11, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.industry)
    .bind(&payload.website)
    .bind(&payload.contact_person)
    .bind(&payload.contact_email)
    .bind(&payload.contact_phone)
    .bind(&payload.address)
    .bind(&payload.notes)
    .bind(payload.open_positions)
    .bind(payload.office_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_company(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM companies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
