//! Review field limits and validation.

use crate::error::CoreError;

/// Maximum length for a review title, in characters.
pub const MAX_REVIEW_TITLE_LENGTH: usize = 255;

/// Maximum length for a review body, in characters.
pub const MAX_REVIEW_TEXT_LENGTH: usize = 10_000;

/// Validate the free-text fields of a review.
///
/// Empty title and text are allowed; a review may be a bare like/dislike.
pub fn validate_review_content(title: &str, text: &str) -> Result<(), CoreError> {
    if title.chars().count() > MAX_REVIEW_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Review title exceeds maximum length of {MAX_REVIEW_TITLE_LENGTH} characters"
        )));
    }

    if text.chars().count() > MAX_REVIEW_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Review text exceeds maximum length of {MAX_REVIEW_TEXT_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_like_is_accepted() {
        assert!(validate_review_content("", "").is_ok());
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let title = "t".repeat(MAX_REVIEW_TITLE_LENGTH);
        assert!(validate_review_content(&title, "ok").is_ok());
    }

    #[test]
    fn long_title_rejected() {
        let title = "t".repeat(MAX_REVIEW_TITLE_LENGTH + 1);
        let err = validate_review_content(&title, "").unwrap_err();
        assert!(err.to_string().contains("title exceeds"));
    }

    #[test]
    fn long_text_rejected() {
        let text = "x".repeat(MAX_REVIEW_TEXT_LENGTH + 1);
        let err = validate_review_content("", &text).unwrap_err();
        assert!(err.to_string().contains("text exceeds"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Cyrillic letters are two bytes each in UTF-8.
        let title = "я".repeat(MAX_REVIEW_TITLE_LENGTH);
        assert!(validate_review_content(&title, "").is_ok());
    }
}
