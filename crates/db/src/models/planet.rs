//! Planet entity model and DTOs.

use holocron_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
}

/// DTO for creating a new planet. `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanet {
    pub name: String,
    pub diameter: Option<i32>,
    pub climate: Option<String>,
}

/// DTO for updating an existing planet. All fields are optional.
///
/// `diameter` and `climate` use `Option<Option<T>>` so an explicit `null` clears
/// the column while an absent key leaves it untouched. `name` is NOT NULL,
/// so a `null` name is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlanet {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub diameter: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub climate: Option<Option<String>>,
}
