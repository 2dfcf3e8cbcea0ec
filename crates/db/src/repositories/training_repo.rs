//! Repository for the `trainings` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::training::{CreateTraining, Training, UpdateTraining};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tenant_id, user_id, title, completed_at, valid_until, status, created_at, updated_at";

/// Provides CRUD operations for training records.
pub struct TrainingRepo;

impl TrainingRepo {
    /// Insert a new training record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateTraining,
    ) -> Result<Training, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainings (tenant_id, user_id, title, completed_at, valid_until)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(tenant_id)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(input.completed_at)
            .bind(input.valid_until)
            .fetch_one(pool)
            .await
    }

    /// Find a training record by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainings WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Training>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all training records in a tenant, newest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Training>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trainings WHERE tenant_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List trainings whose validity ends within the next `within_days` days
    /// (including already-lapsed ones that are not marked expired yet).
    pub async fn list_expiring(
        pool: &PgPool,
        tenant_id: DbId,
        within_days: i64,
    ) -> Result<Vec<Training>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trainings
             WHERE tenant_id = $1
               AND valid_until IS NOT NULL
               AND valid_until <= NOW() + ($2 || ' days')::interval
               AND status <> 'expired'
             ORDER BY valid_until"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(tenant_id)
            .bind(within_days.to_string())
            .fetch_all(pool)
            .await
    }

    /// Update a training record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateTraining,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!(
            "UPDATE trainings SET
                title = COALESCE($3, title),
                completed_at = COALESCE($4, completed_at),
                valid_until = COALESCE($5, valid_until),
                status = COALESCE($6, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(input.completed_at)
            .bind(input.valid_until)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a training record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trainings WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
