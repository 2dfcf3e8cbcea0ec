//! Route definitions for incidents and OSHA recordkeeping.

use axum::routing::get;
use axum::Router;

use crate::handlers::incident;
use crate::state::AppState;

/// Routes mounted at `/incidents`.
///
/// ```text
/// GET    /                    -> list_incidents
/// POST   /                    -> create_incident
/// GET    /recordkeeping       -> recordkeeping_summary (?year=YYYY)
/// GET    /hours/{year}        -> get_hours_report
/// PUT    /hours/{year}        -> upsert_hours_report
/// GET    /{id}                -> get_incident
/// PUT    /{id}                -> update_incident
/// DELETE /{id}                -> delete_incident
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(incident::list_incidents).post(incident::create_incident))
        .route("/recordkeeping", get(incident::recordkeeping_summary))
        .route(
            "/hours/{year}",
            get(incident::get_hours_report).put(incident::upsert_hours_report),
        )
        .route(
            "/{id}",
            get(incident::get_incident)
                .put(incident::update_incident)
                .delete(incident::delete_incident),
        )
}
