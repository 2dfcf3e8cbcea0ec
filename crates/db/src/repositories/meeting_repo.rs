//! Repository for the `meetings` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::{CreateMeeting, Meeting, UpdateMeeting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tenant_id, title, agenda, starts_at, location, status, created_at, updated_at";

/// Provides CRUD operations for safety meetings.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a new meeting, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateMeeting,
    ) -> Result<Meeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO meetings (tenant_id, title, agenda, starts_at, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.agenda)
            .bind(input.starts_at)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a meeting by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a meeting by id only. Used by the reminder dispatcher, which
    /// operates across tenants.
    pub async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all meetings in a tenant, soonest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Meeting>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM meetings WHERE tenant_id = $1 ORDER BY starts_at");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a meeting. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!(
            "UPDATE meetings SET
                title = COALESCE($3, title),
                agenda = COALESCE($4, agenda),
                starts_at = COALESCE($5, starts_at),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.agenda)
            .bind(input.starts_at)
            .bind(&input.location)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a meeting. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meetings WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
