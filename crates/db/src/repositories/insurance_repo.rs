//! Repository for the `insurance_policies` table.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::insurance::{CreatePolicy, InsurancePolicy, UpdatePolicy};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, carrier, policy_number, policy_type, premium_cents, \
    starts_at, expires_at, status, created_at, updated_at";

/// Provides CRUD operations for insurance policies.
pub struct InsuranceRepo;

impl InsuranceRepo {
    /// Insert a new policy, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreatePolicy,
    ) -> Result<InsurancePolicy, sqlx::Error> {
        let query = format!(
            "INSERT INTO insurance_policies
                (tenant_id, carrier, policy_number, policy_type, premium_cents, starts_at, expires_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InsurancePolicy>(&query)
            .bind(tenant_id)
            .bind(&input.carrier)
            .bind(&input.policy_number)
            .bind(&input.policy_type)
            .bind(input.premium_cents)
            .bind(input.starts_at)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a policy by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<InsurancePolicy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insurance_policies WHERE tenant_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, InsurancePolicy>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all policies in a tenant, soonest expiry first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<InsurancePolicy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insurance_policies WHERE tenant_id = $1 ORDER BY expires_at"
        );
        sqlx::query_as::<_, InsurancePolicy>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List active policies expiring within the next `within_days` days.
    pub async fn list_expiring(
        pool: &PgPool,
        tenant_id: DbId,
        within_days: i64,
    ) -> Result<Vec<InsurancePolicy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM insurance_policies
             WHERE tenant_id = $1
               AND status = 'active'
               AND expires_at <= NOW() + ($2 || ' days')::interval
             ORDER BY expires_at"
        );
        sqlx::query_as::<_, InsurancePolicy>(&query)
            .bind(tenant_id)
            .bind(within_days.to_string())
            .fetch_all(pool)
            .await
    }

    /// Update a policy. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdatePolicy,
    ) -> Result<Option<InsurancePolicy>, sqlx::Error> {
        let query = format!(
            "UPDATE insurance_policies SET
                carrier = COALESCE($3, carrier),
                policy_type = COALESCE($4, policy_type),
                premium_cents = COALESCE($5, premium_cents),
                starts_at = COALESCE($6, starts_at),
                expires_at = COALESCE($7, expires_at),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InsurancePolicy>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.carrier)
            .bind(&input.policy_type)
            .bind(input.premium_cents)
            .bind(input.starts_at)
            .bind(input.expires_at)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a policy. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM insurance_policies WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
