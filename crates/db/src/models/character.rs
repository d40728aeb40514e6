//! Character entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
}

/// DTO for creating a new character. `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub species: Option<String>,
    pub gender: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
///
/// `species` and `gender` use `Option<Option<T>>` so an explicit `null` clears
/// the column while an absent key leaves it untouched. `name` is NOT NULL,
/// so a `null` name is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub species: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub gender: Option<Option<String>>,
}
