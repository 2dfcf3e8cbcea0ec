//! Route definitions for audits and inspections.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Routes mounted at `/audits`. Create/reschedule/delete drive reminder
/// fan-out and cancellation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audit::list_audits).post(audit::create_audit))
        .route(
            "/{id}",
            get(audit::get_audit)
                .put(audit::update_audit)
                .delete(audit::delete_audit),
        )
}
