pub mod character;
pub mod favorite;
pub mod health;
pub mod planet;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                  list
/// /users/favorites                        current user's favorites
///
/// /favorite/planet/{planet_id}            add, remove (POST, DELETE)
/// /favorite/people/{character_id}         add, remove (POST, DELETE)
///
/// /planets                                list, create
/// /planets/{id}                           get, update, delete
///
/// /characters                             list, create
/// /characters/{id}                        get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/favorite", favorite::router())
        .nest("/planets", planet::router())
        .nest("/characters", character::router())
}
