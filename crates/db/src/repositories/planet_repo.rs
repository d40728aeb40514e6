//! Repository for the `planets` table.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::planet::{CreatePlanet, Planet, UpdatePlanet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, diameter, climate";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, diameter, climate) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(input.diameter)
            .bind(&input.climate)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all planets ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Update a planet. Absent fields keep their value; `diameter` and `climate`
    /// are set (possibly to NULL) when supplied. `name` is never cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlanet,
    ) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!(
            "UPDATE planets SET \
                name = COALESCE($2, name), \
                diameter = CASE WHEN $3 THEN $4 ELSE diameter END, \
                climate = CASE WHEN $5 THEN $6 ELSE climate END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.diameter.is_some())
            .bind(input.diameter.flatten())
            .bind(input.climate.is_some())
            .bind(input.climate.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a planet. Favorites pointing at it keep their row with
    /// `planet_id` set to NULL.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
