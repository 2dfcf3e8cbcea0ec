//! Repository for the append-only `activity_log` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::ActivityEntry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, user_id, action, entity_type, entity_id, detail, created_at";

/// Provides append and query operations on the activity log.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append one entry. Callers pass a dot-separated action name such as
    /// `"incident.created"`.
    pub async fn record(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: Option<DbId>,
        action: &str,
        entity_type: Option<&str>,
        entity_id: Option<DbId>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO activity_log (tenant_id, user_id, action, entity_type, entity_id)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Query a page of entries for a tenant, newest first.
    pub async fn query(
        pool: &PgPool,
        tenant_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             WHERE tenant_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(tenant_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total entry count for a tenant.
    pub async fn count(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM activity_log WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }
}
