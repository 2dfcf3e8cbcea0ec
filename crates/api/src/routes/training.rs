//! Route definitions for training records.

use axum::routing::get;
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

/// Routes mounted at `/trainings`.
///
/// ```text
/// GET    /           -> list_trainings
/// POST   /           -> create_training
/// GET    /expiring   -> list_expiring_trainings
/// GET    /{id}       -> get_training
/// PUT    /{id}       -> update_training
/// DELETE /{id}       -> delete_training
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(training::list_trainings).post(training::create_training))
        .route("/expiring", get(training::list_expiring_trainings))
        .route(
            "/{id}",
            get(training::get_training)
                .put(training::update_training)
                .delete(training::delete_training),
        )
}
