//! Shared response bodies for API handlers.
//!
//! Entities are returned bare (no envelope). Deletes answer with a
//! [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
