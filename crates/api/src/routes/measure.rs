//! Route definitions for corrective measures.

use axum::routing::get;
use axum::Router;

use crate::handlers::measure;
use crate::state::AppState;

/// Routes mounted at `/measures`. Create/reschedule/delete drive reminder
/// fan-out and cancellation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(measure::list_measures).post(measure::create_measure))
        .route(
            "/{id}",
            get(measure::get_measure)
                .put(measure::update_measure)
                .delete(measure::delete_measure),
        )
}
