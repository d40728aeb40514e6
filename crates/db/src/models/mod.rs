//! Entity models and DTOs.
//!
//! Row structs derive `Serialize`; their JSON form is the transport
//! representation returned by the API.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some`, keeping an explicit JSON `null`
/// as `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`:
/// absent keeps the stored value, `null` clears it.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
