//! Repository for the `risks` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::risk::{CreateRisk, Risk, UpdateRisk};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, title, category, probability, consequence, score, \
    mitigation, status, created_at, updated_at";

/// Provides CRUD operations for risk assessments.
pub struct RiskRepo;

impl RiskRepo {
    /// Insert a new risk with its precomputed matrix score.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateRisk,
        score: i16,
    ) -> Result<Risk, sqlx::Error> {
        let query = format!(
            "INSERT INTO risks (tenant_id, title, category, probability, consequence, score,
                                mitigation)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.probability)
            .bind(input.consequence)
            .bind(score)
            .bind(&input.mitigation)
            .fetch_one(pool)
            .await
    }

    /// Find a risk by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM risks WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Risk>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all risks in a tenant, highest score first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Risk>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM risks WHERE tenant_id = $1 ORDER BY score DESC, created_at DESC"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a risk with its recomputed score. Only non-`None` fields in
    /// `input` are applied; `score` is always written because the handler
    /// recomputes it from the effective axis values.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateRisk,
        score: i16,
    ) -> Result<Option<Risk>, sqlx::Error> {
        let query = format!(
            "UPDATE risks SET
                title = COALESCE($3, title),
                category = COALESCE($4, category),
                probability = COALESCE($5, probability),
                consequence = COALESCE($6, consequence),
                score = $7,
                mitigation = COALESCE($8, mitigation),
                status = COALESCE($9, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Risk>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.probability)
            .bind(input.consequence)
            .bind(score)
            .bind(&input.mitigation)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a risk. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM risks WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
