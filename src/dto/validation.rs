//! Validation helpers for DTOs.

use validator::ValidationError;

/// Maximum accepted username length.
const USERNAME_MAX: usize = 32;

/// Validates that a username is non-blank and at most 32 characters.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        let mut err = ValidationError::new("username_blank");
        err.message = Some("username must not be blank".into());
        return Err(err);
    }

    if username.chars().count() > USERNAME_MAX {
        let mut err = ValidationError::new("username_length");
        err.message =
            Some(format!("username must be at most {USERNAME_MAX} characters").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("player_2").is_ok());
    }

    #[test]
    fn rejects_blank_usernames() {
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
    }

    #[test]
    fn rejects_oversized_usernames() {
        assert!(validate_username(&"x".repeat(33)).is_err());
        assert!(validate_username(&"x".repeat(32)).is_ok());
    }
}
