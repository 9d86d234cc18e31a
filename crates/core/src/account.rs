//! Username and password rules for account registration.

use crate::error::CoreError;

/// Maximum length for a username, in characters.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Validate a username for registration.
///
/// Usernames are case-sensitive, must be non-empty and contain no
/// whitespace.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation(
            "Username must not be empty".to_string(),
        ));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LENGTH} characters long"
        )));
    }

    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a password meets the configured minimum length.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length.max(1) {
        return Err(CoreError::Validation(format!(
            "Password must be at least {} characters long",
            min_length.max(1)
        )));
    }
    Ok(())
}
