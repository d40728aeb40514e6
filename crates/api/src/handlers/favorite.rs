//! Handlers for the `/favorite` resource.
//!
//! Favorites are always created for and removed from the configured
//! current user:
//! `/favorite/planet/{planet_id}` and `/favorite/people/{character_id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_core::types::DbId;
use holocron_db::models::favorite::Favorite;
use holocron_db::repositories::{CharacterRepo, FavoriteRepo, PlanetRepo};

use crate::error::{AppError, AppResult};
use crate::extract::PathParam;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /favorite/planet/{planet_id}
pub async fn add_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<DbId>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    PlanetRepo::find_by_id(&state.pool, planet_id)
        .await?
        .ok_or(AppError::not_found("Planet", planet_id))?;

    let user_id = state.config.current_user_id;
    let favorite = FavoriteRepo::create(&state.pool, user_id, Some(planet_id), None).await?;
    tracing::info!(id = favorite.id, user_id, planet_id, "Favorite planet added");
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// POST /favorite/people/{character_id}
pub async fn add_character(
    State(state): State<AppState>,
    PathParam(character_id): PathParam<DbId>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    CharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .ok_or(AppError::not_found("Character", character_id))?;

    let user_id = state.config.current_user_id;
    let favorite = FavoriteRepo::create(&state.pool, user_id, None, Some(character_id)).await?;
    tracing::info!(id = favorite.id, user_id, character_id, "Favorite character added");
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorite/planet/{planet_id}
pub async fn remove_planet(
    State(state): State<AppState>,
    PathParam(planet_id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = state.config.current_user_id;
    if !FavoriteRepo::delete_for_planet(&state.pool, user_id, planet_id).await? {
        return Err(AppError::not_found("Favorite planet", planet_id));
    }
    tracing::info!(user_id, planet_id, "Favorite planet deleted");
    Ok(Json(MessageResponse::new("Favorite planet deleted")))
}

/// DELETE /favorite/people/{character_id}
pub async fn remove_character(
    State(state): State<AppState>,
    PathParam(character_id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = state.config.current_user_id;
    if !FavoriteRepo::delete_for_character(&state.pool, user_id, character_id).await? {
        return Err(AppError::not_found("Favorite character", character_id));
    }
    tracing::info!(user_id, character_id, "Favorite character deleted");
    Ok(Json(MessageResponse::new("Favorite character deleted")))
}
