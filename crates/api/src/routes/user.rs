//! Route definitions for user administration and own profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                   -> list_users (admin)
/// POST   /                   -> create_user (admin)
/// GET    /me                 -> me
/// GET    /me/notifications   -> get_notification_settings
/// PUT    /me/notifications   -> update_notification_settings
/// GET    /{id}               -> get_user (admin)
/// PUT    /{id}               -> update_user (admin)
/// DELETE /{id}               -> deactivate_user (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users).post(user::create_user))
        .route("/me", get(user::me))
        .route(
            "/me/notifications",
            get(user::get_notification_settings).put(user::update_notification_settings),
        )
        .route(
            "/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::deactivate_user),
        )
}
