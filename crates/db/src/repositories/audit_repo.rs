//! Repository for the `audits` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::audit::{Audit, CreateAudit, UpdateAudit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, title, audit_type, standard, scheduled_at, findings, \
    status, created_at, updated_at";

/// Provides CRUD operations for audits and inspections.
pub struct AuditRepo;

impl AuditRepo {
    /// Insert a new audit, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateAudit,
    ) -> Result<Audit, sqlx::Error> {
        let query = format!(
            "INSERT INTO audits (tenant_id, title, audit_type, standard, scheduled_at)
             VALUES ($1, $2, COALESCE($3, 'internal'), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Audit>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.audit_type)
            .bind(&input.standard)
            .bind(input.scheduled_at)
            .fetch_one(pool)
            .await
    }

    /// Find an audit by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Audit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audits WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Audit>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up an audit by id only. Used by the reminder dispatcher, which
    /// operates across tenants.
    pub async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<Audit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audits WHERE id = $1");
        sqlx::query_as::<_, Audit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all audits in a tenant, soonest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Audit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM audits WHERE tenant_id = $1 ORDER BY scheduled_at");
        sqlx::query_as::<_, Audit>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update an audit. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateAudit,
    ) -> Result<Option<Audit>, sqlx::Error> {
        let query = format!(
            "UPDATE audits SET
                title = COALESCE($3, title),
                audit_type = COALESCE($4, audit_type),
                standard = COALESCE($5, standard),
                scheduled_at = COALESCE($6, scheduled_at),
                findings = COALESCE($7, findings),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Audit>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.audit_type)
            .bind(&input.standard)
            .bind(input.scheduled_at)
            .bind(&input.findings)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an audit. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audits WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
