//! Presence checks applied to incoming DTOs before they reach the database.

use crate::error::CoreError;

/// Reject a required text field that is empty or only whitespace.
pub fn require_present(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' must not be blank")));
    }
    Ok(())
}

/// Like [`require_present`], but only when the field was supplied.
///
/// Partial updates leave absent fields untouched, so `None` passes.
pub fn require_present_if_set(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_present(field, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_value_accepted() {
        assert!(require_present("name", "Tatooine").is_ok());
    }

    #[test]
    fn blank_values_rejected() {
        assert!(require_present("name", "").is_err());
        assert!(require_present("name", "   ").is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = require_present("name", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: 'name' must not be blank");
    }

    #[test]
    fn absent_optional_value_accepted() {
        assert!(require_present_if_set("name", None).is_ok());
        assert!(require_present_if_set("name", Some("Hoth")).is_ok());
        assert!(require_present_if_set("name", Some(" ")).is_err());
    }
}
