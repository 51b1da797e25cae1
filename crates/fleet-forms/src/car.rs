//! Car form

use fleet_forms_validation::{
    string::{validate_max_length, validate_required},
    FieldErrors, Validate,
};
use serde::Deserialize;
use tracing::debug;

pub use fleet_forms_validation::string::CAR_FIELD_MAX_LENGTH;

/// Car creation form
#[derive(Debug, Clone, Deserialize)]
pub struct CarCreateForm {
    pub model: String,
    pub manufacturer: String,
}

impl Validate for CarCreateForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for (field, value) in [("model", &self.model), ("manufacturer", &self.manufacturer)] {
            if let Err(message) = validate_required(value) {
                errors.entry(field.to_string()).or_default().push(message);
            }
            if let Err(message) = validate_max_length(value, CAR_FIELD_MAX_LENGTH) {
                errors.entry(field.to_string()).or_default().push(message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            debug!(form = "CarCreateForm", fields = errors.len(), "form failed validation");
            Err(errors)
        }
    }
}
