//! Repository for the `favorites` table.
//!
//! Reads always return [`Favorite`] with its planet and character expanded
//! via a single `LEFT JOIN` query.

use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::{Favorite, FavoriteRow};

/// Joined select shared by every read. Callers append a `WHERE` clause.
const SELECT_EXPANDED: &str = "\
    SELECT f.id, f.user_id, f.planet_id, f.character_id, \
           p.name AS planet_name, p.diameter AS planet_diameter, \
           p.climate AS planet_climate, \
           c.name AS character_name, c.species AS character_species, \
           c.gender AS character_gender \
    FROM favorites f \
    LEFT JOIN planets p ON p.id = f.planet_id \
    LEFT JOIN characters c ON c.id = f.character_id";

/// Provides create, read and delete operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite for `user_id` and return it expanded.
    ///
    /// The insert and the joined re-read share one transaction.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        planet_id: Option<DbId>,
        character_id: Option<DbId>,
    ) -> Result<Favorite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO favorites (user_id, planet_id, character_id) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(user_id)
        .bind(planet_id)
        .bind(character_id)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("{SELECT_EXPANDED} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    /// Find a favorite by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!("{SELECT_EXPANDED} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Favorite::from))
    }

    /// List every favorite owned by a user, ordered by ID.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("{SELECT_EXPANDED} WHERE f.user_id = $1 ORDER BY f.id");
        let rows = sqlx::query_as::<_, FavoriteRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Favorite::from).collect())
    }

    /// Delete the oldest favorite linking `user_id` to `planet_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_planet(
        pool: &PgPool,
        user_id: DbId,
        planet_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE id = ( \
                SELECT id FROM favorites \
                WHERE user_id = $1 AND planet_id = $2 \
                ORDER BY id LIMIT 1)",
        )
        .bind(user_id)
        .bind(planet_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the oldest favorite linking `user_id` to `character_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_character(
        pool: &PgPool,
        user_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE id = ( \
                SELECT id FROM favorites \
                WHERE user_id = $1 AND character_id = $2 \
                ORDER BY id LIMIT 1)",
        )
        .bind(user_id)
        .bind(character_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
