//! Route definitions for environmental aspects.

use axum::routing::get;
use axum::Router;

use crate::handlers::aspect;
use crate::state::AppState;

/// Routes mounted at `/aspects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(aspect::list_aspects).post(aspect::create_aspect))
        .route(
            "/{id}",
            get(aspect::get_aspect)
                .put(aspect::update_aspect)
                .delete(aspect::delete_aspect),
        )
}
