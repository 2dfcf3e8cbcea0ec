//! Route definitions for safety meetings.

use axum::routing::get;
use axum::Router;

use crate::handlers::meeting;
use crate::state::AppState;

/// Routes mounted at `/meetings`. Create/reschedule/delete drive reminder
/// fan-out and cancellation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meeting::list_meetings).post(meeting::create_meeting))
        .route(
            "/{id}",
            get(meeting::get_meeting)
                .put(meeting::update_meeting)
                .delete(meeting::delete_meeting),
        )
}
