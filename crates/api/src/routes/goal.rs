//! Route definitions for EHS goals.

use axum::routing::get;
use axum::Router;

use crate::handlers::goal;
use crate::state::AppState;

/// Routes mounted at `/goals`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal::list_goals).post(goal::create_goal))
        .route(
            "/{id}",
            get(goal::get_goal).put(goal::update_goal).delete(goal::delete_goal),
        )
}
