//! Repository for the `measures` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::measure::{CreateMeasure, Measure, UpdateMeasure};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, incident_id, risk_id, title, description, \
    responsible_user_id, due_at, status, created_at, updated_at";

/// Provides CRUD operations for corrective measures.
pub struct MeasureRepo;

impl MeasureRepo {
    /// Insert a new measure, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateMeasure,
    ) -> Result<Measure, sqlx::Error> {
        let query = format!(
            "INSERT INTO measures (tenant_id, incident_id, risk_id, title, description,
                                   responsible_user_id, due_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measure>(&query)
            .bind(tenant_id)
            .bind(input.incident_id)
            .bind(input.risk_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.responsible_user_id)
            .bind(input.due_at)
            .fetch_one(pool)
            .await
    }

    /// Find a measure by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Measure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measures WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Measure>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a measure by id only. Used by the reminder dispatcher, which
    /// operates across tenants.
    pub async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<Measure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measures WHERE id = $1");
        sqlx::query_as::<_, Measure>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all measures in a tenant, earliest due first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Measure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measures WHERE tenant_id = $1 ORDER BY due_at");
        sqlx::query_as::<_, Measure>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a measure. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateMeasure,
    ) -> Result<Option<Measure>, sqlx::Error> {
        let query = format!(
            "UPDATE measures SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                responsible_user_id = COALESCE($5, responsible_user_id),
                due_at = COALESCE($6, due_at),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measure>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.responsible_user_id)
            .bind(input.due_at)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a measure. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM measures WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
