//! Route definitions for the activity log.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activity`. Admin only.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activity::query_activity))
}
