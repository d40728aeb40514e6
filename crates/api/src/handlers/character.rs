//! Handlers for the `/characters` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_core::types::DbId;
use holocron_core::validation::{require_present, require_present_if_set};
use holocron_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use holocron_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PartialJsonBody, PathParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    tracing::debug!(count = characters.len(), "Listed characters");
    Ok(Json(characters))
}

/// POST /characters
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    require_present("name", &input.name)?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Character", id))?;
    Ok(Json(character))
}

/// PUT /characters/{id}
///
/// Fields absent from the body keep their stored value; an explicit `null`
/// clears a nullable field. `{}` returns the row unchanged.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    PartialJsonBody(input): PartialJsonBody<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    require_present_if_set("name", input.name.as_deref())?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Character", id))?;
    tracing::info!(id, "Character updated");
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CharacterRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Character", id));
    }
    tracing::info!(id, "Character deleted");
    Ok(Json(MessageResponse::new("Character deleted")))
}
