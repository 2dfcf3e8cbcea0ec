//! Repository for the `environmental_aspects` table.

use nova_core::aspects::Significance;
use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::aspect::{CreateAspect, EnvironmentalAspect, UpdateAspect};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, activity, aspect, impact, severity, frequency, \
    regulatory_requirement, score, is_significant, created_at, updated_at";

/// Provides CRUD operations for environmental aspects.
pub struct AspectRepo;

impl AspectRepo {
    /// Insert a new aspect with its precomputed significance.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateAspect,
        significance: Significance,
    ) -> Result<EnvironmentalAspect, sqlx::Error> {
        let query = format!(
            "INSERT INTO environmental_aspects
                (tenant_id, activity, aspect, impact, severity, frequency,
                 regulatory_requirement, score, is_significant)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EnvironmentalAspect>(&query)
            .bind(tenant_id)
            .bind(&input.activity)
            .bind(&input.aspect)
            .bind(&input.impact)
            .bind(input.severity)
            .bind(input.frequency)
            .bind(input.regulatory_requirement)
            .bind(significance.score)
            .bind(significance.is_significant)
            .fetch_one(pool)
            .await
    }

    /// Find an aspect by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<EnvironmentalAspect>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM environmental_aspects WHERE tenant_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, EnvironmentalAspect>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all aspects in a tenant, most significant first.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<EnvironmentalAspect>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM environmental_aspects
             WHERE tenant_id = $1
             ORDER BY is_significant DESC, score DESC, created_at DESC"
        );
        sqlx::query_as::<_, EnvironmentalAspect>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update an aspect with its recomputed significance. Only non-`None`
    /// fields in `input` are applied; `score` and `is_significant` are
    /// always written.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateAspect,
        significance: Significance,
    ) -> Result<Option<EnvironmentalAspect>, sqlx::Error> {
        let query = format!(
            "UPDATE environmental_aspects SET
                activity = COALESCE($3, activity),
                aspect = COALESCE($4, aspect),
                impact = COALESCE($5, impact),
                severity = COALESCE($6, severity),
                frequency = COALESCE($7, frequency),
                regulatory_requirement = COALESCE($8, regulatory_requirement),
                score = $9,
                is_significant = $10,
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EnvironmentalAspect>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.activity)
            .bind(&input.aspect)
            .bind(&input.impact)
            .bind(input.severity)
            .bind(input.frequency)
            .bind(input.regulatory_requirement)
            .bind(significance.score)
            .bind(significance.is_significant)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an aspect. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM environmental_aspects WHERE tenant_id = $1 AND id = $2")
                .bind(tenant_id)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
