//! Repository for the `sds_suggestions` table.

use nova_core::status::{SDS_CONFIRMED, SDS_REJECTED, SDS_SUGGESTED};
use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::sds_suggestion::SdsSuggestion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, chemical_id, filename, sender, subject, confidence, \
    status, created_at, updated_at";

/// Provides operations on SDS match suggestions.
pub struct SdsSuggestionRepo;

impl SdsSuggestionRepo {
    /// Insert a suggestion produced by the matching heuristic.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        chemical_id: DbId,
        filename: &str,
        sender: &str,
        subject: &str,
        confidence: f64,
        status: &str,
    ) -> Result<SdsSuggestion, sqlx::Error> {
        let query = format!(
            "INSERT INTO sds_suggestions
                (tenant_id, chemical_id, filename, sender, subject, confidence, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SdsSuggestion>(&query)
            .bind(tenant_id)
            .bind(chemical_id)
            .bind(filename)
            .bind(sender)
            .bind(subject)
            .bind(confidence)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// List suggestions for a tenant, optionally filtered by status,
    /// newest first.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<SdsSuggestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sds_suggestions
             WHERE tenant_id = $1 AND ($2::text IS NULL OR status = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SdsSuggestion>(&query)
            .bind(tenant_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Count suggestions awaiting human confirmation.
    pub async fn pending_count(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM sds_suggestions WHERE tenant_id = $1 AND status = $2",
        )
        .bind(tenant_id)
        .bind(SDS_SUGGESTED)
        .fetch_one(pool)
        .await
    }

    /// Confirm a suggested match. Only `suggested` rows can be confirmed.
    pub async fn confirm(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<SdsSuggestion>, sqlx::Error> {
        Self::transition(pool, tenant_id, id, SDS_CONFIRMED).await
    }

    /// Reject a suggested match. Only `suggested` rows can be rejected.
    pub async fn reject(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<SdsSuggestion>, sqlx::Error> {
        Self::transition(pool, tenant_id, id, SDS_REJECTED).await
    }

    async fn transition(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        to_status: &str,
    ) -> Result<Option<SdsSuggestion>, sqlx::Error> {
        let query = format!(
            "UPDATE sds_suggestions SET status = $3, updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SdsSuggestion>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(to_status)
            .bind(SDS_SUGGESTED)
            .fetch_optional(pool)
            .await
    }
}
