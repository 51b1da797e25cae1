//! Driver forms
//!
//! [`DriverCreateForm`] covers driver sign-up; [`DriverLicenseUpdateForm`]
//! changes just the license number of an existing driver. Both validate
//! the license shape, and both run the uniqueness check against the
//! driver directory once the shape rules pass.

use fleet_forms_types::LicenseNumber;
use fleet_forms_validation::{
    license::validate_license_number,
    string::{validate_max_length, validate_required},
    validate_email, FieldErrors, Validate,
};
use fleet_registry::DriverDirectory;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{FormError, DUPLICATE_LICENSE_MESSAGE};

pub use fleet_forms_validation::string::NAME_MAX_LENGTH;

/// Driver creation form
#[derive(Debug, Clone, Deserialize)]
pub struct DriverCreateForm {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub license_number: String,
}

impl Validate for DriverCreateForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(message) = validate_required(&self.username) {
            push_error(&mut errors, "username", message);
        }
        if let Err(message) = validate_max_length(&self.username, NAME_MAX_LENGTH) {
            push_error(&mut errors, "username", message);
        }

        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if let Err(message) = validate_max_length(value, NAME_MAX_LENGTH) {
                push_error(&mut errors, field, message);
            }
        }

        // Email is optional, but must be well-formed when present
        if !self.email.trim().is_empty() {
            if let Err(message) = validate_email(&self.email) {
                push_error(&mut errors, "email", message);
            }
        }

        push_license_violations(&mut errors, &self.license_number);

        finish(errors, "DriverCreateForm")
    }
}

impl DriverCreateForm {
    /// Validate the form, then check the license number is not taken
    ///
    /// Shape errors and the duplicate error are both reported under
    /// their field; a failed directory lookup is not a field error and
    /// surfaces as [`FormError::DirectoryUnavailable`].
    pub async fn clean(
        &self,
        directory: &dyn DriverDirectory,
    ) -> Result<LicenseNumber, FormError> {
        self.validate().map_err(FormError::Invalid)?;
        clean_license_number(&self.license_number, directory).await
    }
}

/// License-change form for an existing driver
#[derive(Debug, Clone, Deserialize)]
pub struct DriverLicenseUpdateForm {
    pub license_number: String,
}

impl Validate for DriverLicenseUpdateForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        push_license_violations(&mut errors, &self.license_number);
        finish(errors, "DriverLicenseUpdateForm")
    }
}

impl DriverLicenseUpdateForm {
    /// Validate the new license number, then check it is not taken
    pub async fn clean(
        &self,
        directory: &dyn DriverDirectory,
    ) -> Result<LicenseNumber, FormError> {
        self.validate().map_err(FormError::Invalid)?;
        clean_license_number(&self.license_number, directory).await
    }
}

/// Append every violated license rule to the field's error list
fn push_license_violations(errors: &mut FieldErrors, candidate: &str) {
    if let Err(violations) = validate_license_number(candidate) {
        let messages = errors.entry("license_number".to_string()).or_default();
        for violation in violations {
            messages.push(violation.message().to_string());
        }
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

fn finish(errors: FieldErrors, form: &'static str) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(form, fields = errors.len(), "form failed validation");
        Err(errors)
    }
}

/// Uniqueness step, run on a shape-valid candidate
async fn clean_license_number(
    candidate: &str,
    directory: &dyn DriverDirectory,
) -> Result<LicenseNumber, FormError> {
    let license = LicenseNumber::try_new(candidate.to_string()).map_err(|_| {
        let mut errors = FieldErrors::new();
        push_license_violations(&mut errors, candidate);
        FormError::Invalid(errors)
    })?;

    let taken = directory
        .license_exists(license.as_ref())
        .await
        .map_err(|source| {
            warn!(directory = directory.name(), "license lookup failed");
            FormError::DirectoryUnavailable(source)
        })?;

    if taken {
        debug!("license number already registered");
        let mut errors = FieldErrors::new();
        errors.insert(
            "license_number".to_string(),
            vec![DUPLICATE_LICENSE_MESSAGE.to_string()],
        );
        return Err(FormError::Invalid(errors));
    }

    Ok(license)
}
