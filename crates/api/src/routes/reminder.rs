//! Route definitions for a user's own reminders.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::reminder;
use crate::state::AppState;

/// Routes mounted at `/reminders`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reminder::list_reminders))
        .route("/{id}", delete(reminder::cancel_reminder))
}
