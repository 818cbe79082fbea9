pub mod health;

use axum::routing::{delete, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// PUT    /rooms/{id}/capacity    change room capacity (CAS-guarded)
/// DELETE /rooms/{id}             retire a room and its subtree
/// DELETE /gyms/{id}              retire a gym and everything it owns
/// DELETE /class-types/{id}       retire a class type (freezes memberships)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms/{id}/capacity",
            put(handlers::room::set_capacity),
        )
        .route("/rooms/{id}", delete(handlers::room::retire))
        .route("/gyms/{id}", delete(handlers::gym::retire))
        .route("/class-types/{id}", delete(handlers::class_type::retire))
}
