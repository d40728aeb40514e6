//! Favorite entity model.
//!
//! A favorite links a user to a planet and/or a character. Its serialized
//! form embeds the referenced entities one level deep:
//!
//! ```text
//! { id, user_id, planet_id, character_id,
//!   planet:    { id, name, diameter, climate } | null,
//!   character: { id, name, species, gender }   | null }
//! ```

use holocron_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::character::Character;
use crate::models::planet::Planet;

/// A favorite with its planet and character references expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: Option<DbId>,
    pub character_id: Option<DbId>,
    pub planet: Option<Planet>,
    pub character: Option<Character>,
}

/// Flat row produced by joining `favorites` with `planets` and `characters`.
///
/// The joined columns are all nullable because both joins are `LEFT JOIN`s.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteRow {
    pub id: DbId,
    pub user_id: DbId,
    pub planet_id: Option<DbId>,
    pub character_id: Option<DbId>,
    pub planet_name: Option<String>,
    pub planet_diameter: Option<i32>,
    pub planet_climate: Option<String>,
    pub character_name: Option<String>,
    pub character_species: Option<String>,
    pub character_gender: Option<String>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        // A present name means the join matched; `name` is NOT NULL.
        let planet = match (row.planet_id, row.planet_name) {
            (Some(id), Some(name)) => Some(Planet {
                id,
                name,
                diameter: row.planet_diameter,
                climate: row.planet_climate,
            }),
            _ => None,
        };
        let character = match (row.character_id, row.character_name) {
            (Some(id), Some(name)) => Some(Character {
                id,
                name,
                species: row.character_species,
                gender: row.character_gender,
            }),
            _ => None,
        };

        Favorite {
            id: row.id,
            user_id: row.user_id,
            planet_id: row.planet_id,
            character_id: row.character_id,
            planet,
            character,
        }
    }
}
