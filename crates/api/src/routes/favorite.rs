//! Route definitions for favorites of the current user.

use axum::routing::post;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorite`.
///
/// ```text
/// POST   /planet/{planet_id}      -> add_planet
/// DELETE /planet/{planet_id}      -> remove_planet
/// POST   /people/{character_id}   -> add_character
/// DELETE /people/{character_id}   -> remove_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{planet_id}",
            post(favorite::add_planet).delete(favorite::remove_planet),
        )
        .route(
            "/people/{character_id}",
            post(favorite::add_character).delete(favorite::remove_character),
        )
}
