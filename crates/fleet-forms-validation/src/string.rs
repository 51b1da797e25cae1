//! String validation functions

/// Maximum length of the driver identity fields
pub const NAME_MAX_LENGTH: usize = 150;

/// Maximum length of the car text fields
pub const CAR_FIELD_MAX_LENGTH: usize = 255;

/// Validates that a string is non-blank
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        Err("This field is required".to_string())
    } else {
        Ok(())
    }
}

/// Validates maximum string length, counted in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}
