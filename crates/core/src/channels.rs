//! Well-known reminder delivery channel constants.
//!
//! These match the per-user channel toggles (`users.email_enabled`,
//! `users.sms_enabled`) consulted by the reminder fan-out and dispatcher.

/// Reminder delivered as an email via SMTP.
pub const CHANNEL_EMAIL: &str = "email";

/// Reminder delivered as a text message via the SMS gateway.
pub const CHANNEL_SMS: &str = "sms";
