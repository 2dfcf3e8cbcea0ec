//! Route tree for the API.

pub mod activity;
pub mod aspect;
pub mod audit;
pub mod auth;
pub mod chemical;
pub mod claim;
pub mod dashboard;
pub mod document;
pub mod goal;
pub mod health;
pub mod incident;
pub mod insurance;
pub mod measure;
pub mod meeting;
pub mod reminder;
pub mod risk;
pub mod tenant;
pub mod training;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register tenant + admin (public)
/// /auth/login                 login (public)
/// /auth/refresh               refresh token pair (public)
/// /auth/logout                revoke refresh token (requires auth)
///
/// /tenant                     get, update own organization
///
/// /users                      list, create (admin only)
/// /users/{id}                 get, update, deactivate (admin only)
/// /users/me                   own profile
/// /users/me/notifications     own reminder preferences (get, put)
///
/// /documents, /trainings, /goals, /meetings, /incidents, /measures,
/// /risks, /audits, /aspects, /chemicals, /claims, /insurance:
///   GET /             list          (any authenticated user)
///   POST /            create        (hse_manager or admin)
///   GET /{id}         fetch
///   PUT /{id}         update        (hse_manager or admin)
///   DELETE /{id}      hard delete   (hse_manager or admin)
///
/// /trainings/expiring                  trainings lapsing soon
/// /insurance/expiring                  policies lapsing soon
/// /incidents/recordkeeping?year=       OSHA 300A-style summary
/// /incidents/hours/{year}              yearly hours report (get, put)
/// /chemicals/sds-inbox                 score an inbound SDS email (POST)
/// /chemicals/sds-suggestions           list suggestions
/// /chemicals/sds-suggestions/{id}/confirm|reject
///
/// /reminders                  own reminders (list); /{id} cancel
/// /activity                   activity log (admin only)
/// /dashboard/summary          aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tenant", tenant::router())
        .nest("/users", user::router())
        .nest("/documents", document::router())
        .nest("/trainings", training::router())
        .nest("/goals", goal::router())
        .nest("/meetings", meeting::router())
        .nest("/incidents", incident::router())
        .nest("/measures", measure::router())
        .nest("/risks", risk::router())
        .nest("/audits", audit::router())
        .nest("/aspects", aspect::router())
        .nest("/chemicals", chemical::router())
        .nest("/claims", claim::router())
        .nest("/insurance", insurance::router())
        .nest("/reminders", reminder::router())
        .nest("/activity", activity::router())
        .nest("/dashboard", dashboard::router())
}
