//! Reminder scheduling and outbound delivery for HMS Nova.
//!
//! This crate owns the write side of the reminder pipeline:
//!
//! - [`fanout`] — decides, per user, whether an upcoming meeting,
//!   inspection, audit, or measure warrants a reminder, and inserts the
//!   eligible ones as PENDING rows.
//! - [`dispatch`] — the [`ReminderDispatcher`] scans for due PENDING rows
//!   and delivers them over email and/or SMS, marking each SENT or FAILED.
//! - [`delivery`] — the SMTP ([`EmailDelivery`]) and SMS gateway
//!   ([`SmsDelivery`]) transports.

pub mod delivery;
pub mod dispatch;
pub mod fanout;

pub use delivery::email::{EmailConfig, EmailDelivery};
pub use delivery::sms::{SmsConfig, SmsDelivery};
pub use dispatch::{DispatchStats, ReminderDispatcher};
