//! User entity model and DTOs.

use nova_core::reminders::RecipientPrefs;
use nova_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub tenant_id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    /// Role name (`"admin"`, `"hse_manager"`, `"employee"`).
    pub role: String,
    pub password_hash: String,
    pub is_active: bool,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub notify_meetings: bool,
    pub notify_inspections: bool,
    pub notify_audits: bool,
    pub notify_measures: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub reminder_days_before: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The slice of this row the reminder fan-out decision consumes.
    pub fn reminder_prefs(&self) -> RecipientPrefs {
        RecipientPrefs {
            notify_meetings: self.notify_meetings,
            notify_inspections: self.notify_inspections,
            notify_audits: self.notify_audits,
            notify_measures: self.notify_measures,
            email_enabled: self.email_enabled,
            sms_enabled: self.sms_enabled,
            reminder_days_before: self.reminder_days_before,
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user within a tenant.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    pub password_hash: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// A user's reminder/notification preferences, as returned by the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationSettings {
    pub notify_meetings: bool,
    pub notify_inspections: bool,
    pub notify_audits: bool,
    pub notify_measures: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub reminder_days_before: i32,
}

/// DTO for updating notification preferences. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateNotificationSettings {
    pub notify_meetings: Option<bool>,
    pub notify_inspections: Option<bool>,
    pub notify_audits: Option<bool>,
    pub notify_measures: Option<bool>,
    pub email_enabled: Option<bool>,
    pub sms_enabled: Option<bool>,
    pub reminder_days_before: Option<i32>,
}
