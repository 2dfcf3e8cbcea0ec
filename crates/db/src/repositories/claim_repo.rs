//! Repository for the `workers_comp_claims` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::claim::{CreateClaim, UpdateClaim, WorkersCompClaim};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, incident_id, claim_number, carrier, amount_cents, \
    filed_at, status, created_at, updated_at";

/// Provides CRUD operations for workers' compensation claims.
pub struct ClaimRepo;

impl ClaimRepo {
    /// Insert a new claim, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateClaim,
    ) -> Result<WorkersCompClaim, sqlx::Error> {
        let query = format!(
            "INSERT INTO workers_comp_claims
                (tenant_id, incident_id, claim_number, carrier, amount_cents, filed_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkersCompClaim>(&query)
            .bind(tenant_id)
            .bind(input.incident_id)
            .bind(&input.claim_number)
            .bind(&input.carrier)
            .bind(input.amount_cents)
            .bind(input.filed_at)
            .fetch_one(pool)
            .await
    }

    /// Find a claim by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<WorkersCompClaim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workers_comp_claims WHERE tenant_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, WorkersCompClaim>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all claims in a tenant, most recently filed first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<WorkersCompClaim>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workers_comp_claims WHERE tenant_id = $1 ORDER BY filed_at DESC"
        );
        sqlx::query_as::<_, WorkersCompClaim>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a claim. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateClaim,
    ) -> Result<Option<WorkersCompClaim>, sqlx::Error> {
        let query = format!(
            "UPDATE workers_comp_claims SET
                carrier = COALESCE($3, carrier),
                amount_cents = COALESCE($4, amount_cents),
                status = COALESCE($5, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkersCompClaim>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.carrier)
            .bind(input.amount_cents)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a claim. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workers_comp_claims WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
