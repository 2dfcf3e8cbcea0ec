//! Route definitions for risk assessments.

use axum::routing::get;
use axum::Router;

use crate::handlers::risk;
use crate::state::AppState;

/// Routes mounted at `/risks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(risk::list_risks).post(risk::create_risk))
        .route(
            "/{id}",
            get(risk::get_risk).put(risk::update_risk).delete(risk::delete_risk),
        )
}
