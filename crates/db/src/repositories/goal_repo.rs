//! Repository for the `goals` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{CreateGoal, Goal, UpdateGoal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, title, description, due_at, progress_percent, status, \
    created_at, updated_at";

/// Provides CRUD operations for EHS goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateGoal,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (tenant_id, title, description, due_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_at)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all goals in a tenant, newest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Goal>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM goals WHERE tenant_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Goal>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a goal. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateGoal,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                due_at = COALESCE($5, due_at),
                progress_percent = COALESCE($6, progress_percent),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_at)
            .bind(input.progress_percent)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a goal. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
