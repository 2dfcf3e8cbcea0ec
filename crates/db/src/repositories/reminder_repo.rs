//! Repository for the `scheduled_reminders` table.

use nova_core::reminders::ReminderKind;
use nova_core::status::{REMINDER_CANCELLED, REMINDER_FAILED, REMINDER_PENDING, REMINDER_SENT};
use nova_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::reminder::Reminder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, user_id, entity_kind, entity_id, scheduled_for, status, \
    sent_at, error, created_at, updated_at";

/// Provides operations on scheduled reminders.
pub struct ReminderRepo;

impl ReminderRepo {
    /// Insert a PENDING reminder.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: DbId,
        kind: ReminderKind,
        entity_id: DbId,
        scheduled_for: Timestamp,
    ) -> Result<Reminder, sqlx::Error> {
        let query = format!(
            "INSERT INTO scheduled_reminders (tenant_id, user_id, entity_kind, entity_id, scheduled_for)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(tenant_id)
            .bind(user_id)
            .bind(kind.as_str())
            .bind(entity_id)
            .bind(scheduled_for)
            .fetch_one(pool)
            .await
    }

    /// Whether a PENDING or SENT reminder already exists for this
    /// (user, kind, entity) triple. The fan-out idempotence guard.
    pub async fn exists_active(
        pool: &PgPool,
        user_id: DbId,
        kind: ReminderKind,
        entity_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM scheduled_reminders
                WHERE user_id = $1 AND entity_kind = $2 AND entity_id = $3
                  AND status IN ($4, $5)
             )",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .bind(REMINDER_PENDING)
        .bind(REMINDER_SENT)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List PENDING reminders due at or before `now`, oldest first.
    ///
    /// Tenant-unscoped: the dispatcher processes every tenant's queue.
    pub async fn find_due(pool: &PgPool, now: Timestamp) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scheduled_reminders
             WHERE status = $1 AND scheduled_for <= $2
             ORDER BY scheduled_for"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(REMINDER_PENDING)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Mark a reminder SENT.
    pub async fn mark_sent(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scheduled_reminders
             SET status = $2, sent_at = NOW(), error = NULL, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(REMINDER_SENT)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Mark a reminder FAILED with an error description.
    pub async fn mark_failed(pool: &PgPool, id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE scheduled_reminders
             SET status = $2, error = $3, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(REMINDER_FAILED)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Cancel every PENDING reminder for an entity (entity deleted or
    /// rescheduled). Returns the number of rows cancelled.
    pub async fn cancel_for_entity(
        pool: &PgPool,
        tenant_id: DbId,
        kind: ReminderKind,
        entity_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE scheduled_reminders
             SET status = $4, updated_at = NOW()
             WHERE tenant_id = $1 AND entity_kind = $2 AND entity_id = $3 AND status = $5",
        )
        .bind(tenant_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .bind(REMINDER_CANCELLED)
        .bind(REMINDER_PENDING)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List a user's reminders, soonest first.
    pub async fn list_for_user(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scheduled_reminders
             WHERE tenant_id = $1 AND user_id = $2
             ORDER BY scheduled_for"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(tenant_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Cancel one of a user's own PENDING reminders. Returns `true` if a
    /// row was cancelled.
    pub async fn cancel_own(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE scheduled_reminders
             SET status = $4, updated_at = NOW()
             WHERE tenant_id = $1 AND user_id = $2 AND id = $3 AND status = $5",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(id)
        .bind(REMINDER_CANCELLED)
        .bind(REMINDER_PENDING)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
