//! Repository for the `documents` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, tenant_id, title, category, version, status, next_review_at, created_at, updated_at";

/// Provides CRUD operations for controlled documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (tenant_id, title, category, next_review_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.next_review_at)
            .fetch_one(pool)
            .await
    }

    /// Find a document by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Document>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all documents in a tenant, newest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE tenant_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a document. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                title = COALESCE($3, title),
                category = COALESCE($4, category),
                version = COALESCE($5, version),
                status = COALESCE($6, status),
                next_review_at = COALESCE($7, next_review_at),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.version)
            .bind(&input.status)
            .bind(input.next_review_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a document. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
