//! Repository for the `chemicals` table.

use chrono::NaiveDate;
use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::chemical::{Chemical, CreateChemical, UpdateChemical};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, product_name, supplier, cas_number, hazard_class, \
    storage_location, sds_revision_date, created_at, updated_at";

/// Provides CRUD operations for the chemical inventory.
pub struct ChemicalRepo;

impl ChemicalRepo {
    /// Insert a new chemical, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateChemical,
    ) -> Result<Chemical, sqlx::Error> {
        let query = format!(
            "INSERT INTO chemicals (tenant_id, product_name, supplier, cas_number, hazard_class,
                                    storage_location)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chemical>(&query)
            .bind(tenant_id)
            .bind(&input.product_name)
            .bind(&input.supplier)
            .bind(&input.cas_number)
            .bind(&input.hazard_class)
            .bind(&input.storage_location)
            .fetch_one(pool)
            .await
    }

    /// Find a chemical by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Chemical>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chemicals WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Chemical>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full chemical inventory for a tenant, alphabetical.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Chemical>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chemicals WHERE tenant_id = $1 ORDER BY product_name");
        sqlx::query_as::<_, Chemical>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a chemical. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateChemical,
    ) -> Result<Option<Chemical>, sqlx::Error> {
        let query = format!(
            "UPDATE chemicals SET
                product_name = COALESCE($3, product_name),
                supplier = COALESCE($4, supplier),
                cas_number = COALESCE($5, cas_number),
                hazard_class = COALESCE($6, hazard_class),
                storage_location = COALESCE($7, storage_location),
                sds_revision_date = COALESCE($8, sds_revision_date),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chemical>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.product_name)
            .bind(&input.supplier)
            .bind(&input.cas_number)
            .bind(&input.hazard_class)
            .bind(&input.storage_location)
            .bind(input.sds_revision_date)
            .fetch_optional(pool)
            .await
    }

    /// Stamp the SDS revision date after an auto-applied or confirmed match.
    pub async fn set_sds_revision(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        revision_date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE chemicals SET sds_revision_date = $3, updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id)
        .bind(id)
        .bind(revision_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a chemical. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chemicals WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
