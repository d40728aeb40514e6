//! Handlers for the `/planets` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holocron_core::types::DbId;
use holocron_core::validation::{require_present, require_present_if_set};
use holocron_db::models::planet::{CreatePlanet, Planet, UpdatePlanet};
use holocron_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PartialJsonBody, PathParam};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    tracing::debug!(count = planets.len(), "Listed planets");
    Ok(Json(planets))
}

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreatePlanet>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    require_present("name", &input.name)?;
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(id = planet.id, name = %planet.name, "Planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}

/// GET /planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Planet", id))?;
    Ok(Json(planet))
}

/// PUT /planets/{id}
///
/// Fields absent from the body keep their stored value; an explicit `null`
/// clears a nullable field. `{}` returns the row unchanged.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    PartialJsonBody(input): PartialJsonBody<UpdatePlanet>,
) -> AppResult<Json<Planet>> {
    require_present_if_set("name", input.name.as_deref())?;
    let planet = PlanetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Planet", id))?;
    tracing::info!(id, "Planet updated");
    Ok(Json(planet))
}

/// DELETE /planets/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !PlanetRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Planet", id));
    }
    tracing::info!(id, "Planet deleted");
    Ok(Json(MessageResponse::new("Planet deleted")))
}
