//! Aggregate queries for the tenant dashboard.

use nova_core::status::SDS_SUGGESTED;
use nova_core::types::DbId;
use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Window for "upcoming" meetings and audits.
const UPCOMING_DAYS: &str = "7 days";
/// Window for "expiring" trainings.
const EXPIRING_DAYS: &str = "30 days";

/// Provides the dashboard summary aggregate.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Collect the summary counts for one tenant.
    pub async fn summary(pool: &PgPool, tenant_id: DbId) -> Result<DashboardSummary, sqlx::Error> {
        let open_incidents: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM incidents WHERE tenant_id = $1 AND status <> 'closed'",
        )
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let overdue_measures: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM measures
             WHERE tenant_id = $1 AND status <> 'done' AND due_at < NOW()",
        )
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let upcoming_meetings: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM meetings
             WHERE tenant_id = $1 AND status = 'planned'
               AND starts_at BETWEEN NOW() AND NOW() + interval '{UPCOMING_DAYS}'"
        ))
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let upcoming_audits: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM audits
             WHERE tenant_id = $1 AND status = 'planned'
               AND scheduled_at BETWEEN NOW() AND NOW() + interval '{UPCOMING_DAYS}'"
        ))
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let expiring_trainings: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM trainings
             WHERE tenant_id = $1 AND status <> 'expired'
               AND valid_until IS NOT NULL
               AND valid_until <= NOW() + interval '{EXPIRING_DAYS}'"
        ))
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let pending_sds_suggestions: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sds_suggestions WHERE tenant_id = $1 AND status = $2",
        )
        .bind(tenant_id)
        .bind(SDS_SUGGESTED)
        .fetch_one(pool)
        .await?;

        Ok(DashboardSummary {
            open_incidents,
            overdue_measures,
            upcoming_meetings,
            upcoming_audits,
            expiring_trainings,
            pending_sds_suggestions,
        })
    }
}
