//! Form-level error taxonomy

use fleet_forms_validation::FieldErrors;
use thiserror::Error;

/// Message attached to the license field when the value is taken
pub const DUPLICATE_LICENSE_MESSAGE: &str = "A driver with this license number already exists.";

/// Top-level error of the form entry points
///
/// Field-level validation failures and directory outages travel on
/// different variants: a duplicate license number is something the user
/// can fix, an unreachable directory is not.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed validation; messages keyed by field
    #[error("form validation failed")]
    Invalid(FieldErrors),

    /// The driver directory could not answer the uniqueness lookup
    #[error("driver directory unavailable")]
    DirectoryUnavailable(#[source] anyhow::Error),
}

impl FormError {
    /// Field errors if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            FormError::DirectoryUnavailable(_) => None,
        }
    }
}
