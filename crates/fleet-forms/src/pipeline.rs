// File: fleet-forms/src/pipeline.rs
// Purpose: Pipeline for deserializing, validating, and handling form submissions

use std::collections::HashMap;

use fleet_forms_validation::{FieldErrors, Validate};
use serde::de::DeserializeOwned;

/// Field name used for failures that are not tied to a single field
pub const FORM_ERROR_KEY: &str = "_form";

/// Raw submitted form fields, keyed by field name
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

/// Validation errors plus the submitted values, for re-rendering the form
#[derive(Debug, Clone)]
pub struct FormContext {
    pub errors: FieldErrors,
    pub values: HashMap<String, String>,
}

impl FormContext {
    pub fn new(errors: FieldErrors, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Messages for one field, empty when the field is clean
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

/// Result of the validation pipeline
pub enum ValidationPipelineResult<T> {
    /// Validation passed, data is ready for processing
    Valid(T),
    /// Validation failed, contains errors and original form values
    Invalid(FormContext),
}

impl<T> ValidationPipelineResult<T> {
    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationPipelineResult::Valid(_))
    }

    /// Check if validation failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Extract the valid value if validation passed
    pub fn ok(self) -> Option<T> {
        match self {
            ValidationPipelineResult::Valid(data) => Some(data),
            ValidationPipelineResult::Invalid(_) => None,
        }
    }

    /// Extract the form context if validation failed
    pub fn err(self) -> Option<FormContext> {
        match self {
            ValidationPipelineResult::Valid(_) => None,
            ValidationPipelineResult::Invalid(context) => Some(context),
        }
    }
}

/// Execute the validation pipeline
///
/// This function:
/// 1. Deserializes form data into the form type
/// 2. Validates the form using the Validate trait
/// 3. Returns either the valid form or validation errors with original values
pub fn validate_request<T>(form_data: &FormData) -> ValidationPipelineResult<T>
where
    T: DeserializeOwned + Validate,
{
    let form = match deserialize_form::<T>(form_data) {
        Ok(form) => form,
        Err(e) => {
            // Deserialization error - return as validation error
            let mut errors = FieldErrors::new();
            errors.insert(
                FORM_ERROR_KEY.to_string(),
                vec![format!("Failed to parse form data: {}", e)],
            );
            return ValidationPipelineResult::Invalid(FormContext::new(
                errors,
                form_data.as_map().clone(),
            ));
        }
    };

    match form.validate() {
        Ok(()) => ValidationPipelineResult::Valid(form),
        Err(errors) => ValidationPipelineResult::Invalid(FormContext::new(
            errors,
            form_data.as_map().clone(),
        )),
    }
}

fn deserialize_form<T: DeserializeOwned>(form_data: &FormData) -> Result<T, serde_json::Error> {
    let value = serde_json::to_value(form_data.as_map())?;
    serde_json::from_value(value)
}
