//! Owned-record collection constants and validation.

use crate::error::CoreError;

/// Vinyl disc media type.
pub const DISC_TYPE_VINYL: &str = "vinyl";

/// Compact disc media type.
pub const DISC_TYPE_CD: &str = "cd";

/// All valid disc type values.
pub const VALID_DISC_TYPES: &[&str] = &[DISC_TYPE_VINYL, DISC_TYPE_CD];

/// Number of records shown in the related-records section of a label or
/// genre detail view.
pub const RELATED_RECORD_LIMIT: i64 = 10;

/// Validate that a disc type string is one of the accepted values.
pub fn validate_disc_type(disc_type: &str) -> Result<(), CoreError> {
    if VALID_DISC_TYPES.contains(&disc_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid disc type '{disc_type}'. Must be one of: {}",
            VALID_DISC_TYPES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_disc_types_accepted() {
        assert!(validate_disc_type(DISC_TYPE_VINYL).is_ok());
        assert!(validate_disc_type(DISC_TYPE_CD).is_ok());
    }

    #[test]
    fn test_invalid_disc_type_rejected() {
        let result = validate_disc_type("cassette");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid disc type"));
    }

    #[test]
    fn test_empty_disc_type_rejected() {
        assert!(validate_disc_type("").is_err());
    }
}
