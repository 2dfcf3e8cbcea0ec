//! Repository for the `incidents` and `hours_reports` tables.
//!
//! Both tables feed the OSHA recordkeeping summary, so they share one
//! repository: incidents supply the case counts, hours reports supply the
//! exposure-hours denominator.

use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::incident::{
    CreateIncident, HoursReport, Incident, IncidentYearCounts, UpdateIncident, UpsertHoursReport,
};

/// Column list for `incidents` queries.
const COLUMNS: &str = "id, tenant_id, title, description, occurred_at, incident_type, severity, \
    recordable, days_away, restricted_duty, job_transfer, status, created_at, updated_at";

/// Column list for `hours_reports` queries.
const HOURS_COLUMNS: &str =
    "id, tenant_id, year, total_hours_worked, average_employees, created_at, updated_at";

/// Provides CRUD operations for incidents and yearly hours reports.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Insert a new incident, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateIncident,
    ) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents (tenant_id, title, description, occurred_at, incident_type,
                                    severity, recordable, days_away, restricted_duty, job_transfer)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'near_miss'), COALESCE($6, 1), $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(tenant_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.occurred_at)
            .bind(&input.incident_type)
            .bind(input.severity)
            .bind(input.recordable)
            .bind(input.days_away)
            .bind(input.restricted_duty)
            .bind(input.job_transfer)
            .fetch_one(pool)
            .await
    }

    /// Find an incident by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, Incident>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all incidents in a tenant, most recent occurrence first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents WHERE tenant_id = $1 ORDER BY occurred_at DESC"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update an incident. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateIncident,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE incidents SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                occurred_at = COALESCE($5, occurred_at),
                incident_type = COALESCE($6, incident_type),
                severity = COALESCE($7, severity),
                recordable = COALESCE($8, recordable),
                days_away = COALESCE($9, days_away),
                restricted_duty = COALESCE($10, restricted_duty),
                job_transfer = COALESCE($11, job_transfer),
                status = COALESCE($12, status),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.occurred_at)
            .bind(&input.incident_type)
            .bind(input.severity)
            .bind(input.recordable)
            .bind(input.days_away)
            .bind(input.restricted_duty)
            .bind(input.job_transfer)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an incident. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM incidents WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate OSHA case counts for one tenant-year.
    ///
    /// A DART case has days away, restricted duty, or a job transfer; a
    /// lost-time case has days away. Only `recordable` rows count.
    pub async fn year_counts(
        pool: &PgPool,
        tenant_id: DbId,
        year: i32,
    ) -> Result<IncidentYearCounts, sqlx::Error> {
        sqlx::query_as::<_, IncidentYearCounts>(
            "SELECT
                COUNT(*) FILTER (WHERE recordable) AS total_recordable_cases,
                COUNT(*) FILTER (WHERE recordable AND (days_away OR restricted_duty OR job_transfer))
                    AS days_away_restricted_transfer_cases,
                COUNT(*) FILTER (WHERE recordable AND days_away) AS lost_time_cases
             FROM incidents
             WHERE tenant_id = $1 AND EXTRACT(YEAR FROM occurred_at) = $2",
        )
        .bind(tenant_id)
        .bind(year)
        .fetch_one(pool)
        .await
    }

    /// Get the hours report for one tenant-year, if filed.
    pub async fn get_hours_report(
        pool: &PgPool,
        tenant_id: DbId,
        year: i32,
    ) -> Result<Option<HoursReport>, sqlx::Error> {
        let query =
            format!("SELECT {HOURS_COLUMNS} FROM hours_reports WHERE tenant_id = $1 AND year = $2");
        sqlx::query_as::<_, HoursReport>(&query)
            .bind(tenant_id)
            .bind(year)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the hours report for one tenant-year.
    pub async fn upsert_hours_report(
        pool: &PgPool,
        tenant_id: DbId,
        year: i32,
        input: &UpsertHoursReport,
    ) -> Result<HoursReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO hours_reports (tenant_id, year, total_hours_worked, average_employees)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (tenant_id, year) DO UPDATE SET
                total_hours_worked = EXCLUDED.total_hours_worked,
                average_employees = EXCLUDED.average_employees,
                updated_at = NOW()
             RETURNING {HOURS_COLUMNS}"
        );
        sqlx::query_as::<_, HoursReport>(&query)
            .bind(tenant_id)
            .bind(year)
            .bind(input.total_hours_worked)
            .bind(input.average_employees)
            .fetch_one(pool)
            .await
    }
}
