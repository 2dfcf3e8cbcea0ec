//! Route definitions for the current tenant.

use axum::routing::get;
use axum::Router;

use crate::handlers::tenant;
use crate::state::AppState;

/// Routes mounted at `/tenant`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(tenant::get_tenant).put(tenant::update_tenant))
}
