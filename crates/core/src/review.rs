//! Review score constants and validation.
//!
//! The score range is enforced here at the application level, not as a
//! database constraint, so the DB and API layers share one source of truth.

use crate::error::CoreError;

/// Minimum accepted review score.
pub const MIN_SCORE: i32 = 0;

/// Maximum accepted review score.
pub const MAX_SCORE: i32 = 5;

/// Number of related reviews attached to a record detail view.
pub const RELATED_REVIEW_LIMIT: i64 = 10;

/// Validate that a review score lies in the inclusive 0-5 range.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}"
        )))
    }
}

/// Validate that review text is non-empty.
pub fn validate_review_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Review text must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_in_range_accepted() {
        for score in MIN_SCORE..=MAX_SCORE {
            assert!(validate_score(score).is_ok());
        }
    }

    #[test]
    fn test_scores_out_of_range_rejected() {
        assert!(validate_score(-1).is_err());
        assert!(validate_score(6).is_err());
        let msg = validate_score(12).unwrap_err().to_string();
        assert!(msg.contains("between 0 and 5"));
    }

    #[test]
    fn test_empty_review_text_rejected() {
        assert!(validate_review_text("").is_err());
        assert!(validate_review_text("   \t").is_err());
        assert!(validate_review_text("solid record").is_ok());
    }
}
