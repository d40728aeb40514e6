//! User entity model.

use holocron_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// The password column is loaded but never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// DTO for inserting a user through [`UserRepo::create`](crate::repositories::UserRepo::create).
///
/// No HTTP route creates users.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}
