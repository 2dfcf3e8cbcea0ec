//! Repository for the `users` table.

use nova_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::user::{
    CreateUser, NotificationSettings, UpdateNotificationSettings, UpdateUser, User,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, email, name, phone, role, password_hash, is_active, \
    failed_login_count, locked_until, last_login_at, \
    notify_meetings, notify_inspections, notify_audits, notify_measures, \
    email_enabled, sms_enabled, reminder_days_before, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user in the given tenant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (tenant_id, email, name, phone, role, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(tenant_id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE tenant_id = $1 AND id = $2");
        sqlx::query_as::<_, User>(&query)
            .bind(tenant_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email. Emails are globally unique, so this lookup is
    /// tenant-independent; it is the entry point for login.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Look up a user by id only, without tenant scoping. Used by the
    /// refresh-token flow, where the tenant is not known until the user row
    /// is loaded.
    pub async fn find_any(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users in a tenant, newest first.
    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<User>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE tenant_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List active users in a tenant. The candidate set for reminder fan-out.
    pub async fn list_active(pool: &PgPool, tenant_id: DbId) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE tenant_id = $1 AND is_active = true ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($3, email),
                name = COALESCE($4, name),
                phone = COALESCE($5, phone),
                role = COALESCE($6, role),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(tenant_id)
            .bind(id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.role)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a user. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_active = false, updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2 AND is_active = true",
        )
        .bind(tenant_id)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment the failed login counter by 1.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET failed_login_count = failed_login_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Lock a user account until the specified timestamp.
    pub async fn lock_account(
        pool: &PgPool,
        id: DbId,
        until: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Record a successful login: reset the failure counter, clear any lock,
    /// and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Update a user's password hash. Returns `true` if the row was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Get a user's reminder/notification preferences.
    pub async fn get_notification_settings(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: DbId,
    ) -> Result<Option<NotificationSettings>, sqlx::Error> {
        sqlx::query_as::<_, NotificationSettings>(
            "SELECT notify_meetings, notify_inspections, notify_audits, notify_measures, \
                    email_enabled, sms_enabled, reminder_days_before
             FROM users WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Update a user's notification preferences. Only non-`None` fields are
    /// applied.
    pub async fn update_notification_settings(
        pool: &PgPool,
        tenant_id: DbId,
        user_id: DbId,
        input: &UpdateNotificationSettings,
    ) -> Result<Option<NotificationSettings>, sqlx::Error> {
        sqlx::query_as::<_, NotificationSettings>(
            "UPDATE users SET
                notify_meetings = COALESCE($3, notify_meetings),
                notify_inspections = COALESCE($4, notify_inspections),
                notify_audits = COALESCE($5, notify_audits),
                notify_measures = COALESCE($6, notify_measures),
                email_enabled = COALESCE($7, email_enabled),
                sms_enabled = COALESCE($8, sms_enabled),
                reminder_days_before = COALESCE($9, reminder_days_before),
                updated_at = NOW()
             WHERE tenant_id = $1 AND id = $2
             RETURNING notify_meetings, notify_inspections, notify_audits, notify_measures, \
                       email_enabled, sms_enabled, reminder_days_before",
        )
        .bind(tenant_id)
        .bind(user_id)
        .bind(input.notify_meetings)
        .bind(input.notify_inspections)
        .bind(input.notify_audits)
        .bind(input.notify_measures)
        .bind(input.email_enabled)
        .bind(input.sms_enabled)
        .bind(input.reminder_days_before)
        .fetch_optional(pool)
        .await
    }
}
