//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use holocron_db::models::favorite::Favorite;
use holocron_db::models::user::User;
use holocron_db::repositories::{FavoriteRepo, UserRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// GET /users/favorites
///
/// Favorites of the configured current user, with planet and character
/// expanded.
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorite>>> {
    let user_id = state.config.current_user_id;
    let favorites = FavoriteRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = favorites.len(), "Listed favorites");
    Ok(Json(favorites))
}
