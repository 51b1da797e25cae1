/// End-to-end driver form flow
///
/// Drives a submission through the full path: raw field map ->
/// deserialization -> shape validation -> uniqueness check against the
/// directory -> registration of the accepted license.
use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rstest::rstest;

use fleet_forms::{
    validate_request, DriverCreateForm, DriverLicenseUpdateForm, FormData, FormError, Validate,
};
use fleet_registry::{DriverDirectory, MemoryDirectory};

/// Directory double whose lookups always fail
struct FailingDirectory;

#[async_trait]
impl DriverDirectory for FailingDirectory {
    async fn license_exists(&self, _license_number: &str) -> Result<bool> {
        Err(anyhow::anyhow!("directory offline"))
    }

    async fn register_license(&self, _license_number: &str) -> Result<bool> {
        Err(anyhow::anyhow!("directory offline"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn driver_fields(license_number: &str) -> FormData {
    let mut fields = HashMap::new();
    fields.insert("username".to_string(), "jdoe".to_string());
    fields.insert("first_name".to_string(), "Jane".to_string());
    fields.insert("last_name".to_string(), "Doe".to_string());
    fields.insert("email".to_string(), "jdoe@fleet.example".to_string());
    fields.insert("license_number".to_string(), license_number.to_string());
    FormData::from_fields(fields)
}

#[tokio::test]
async fn test_create_then_duplicate_rejected() {
    init_tracing();
    let directory = MemoryDirectory::new();

    // First submission goes through and gets registered
    let form = validate_request::<DriverCreateForm>(&driver_fields("ABC12345"))
        .ok()
        .expect("form should deserialize and validate");
    let license = form.clean(&directory).await.unwrap();
    assert!(directory.register_license(license.as_ref()).await.unwrap());

    // Same license number a second time is a duplicate
    let form = validate_request::<DriverCreateForm>(&driver_fields("ABC12345"))
        .ok()
        .expect("shape is still valid");
    let err = form.clean(&directory).await.unwrap_err();
    let errors = err.field_errors().expect("duplicate is a field error");
    assert_eq!(
        errors["license_number"],
        vec!["A driver with this license number already exists."]
    );
}

#[rstest]
#[case("AB123456", &["The first 3 characters must be uppercase letters"])]
#[case("ABCD1234", &["The last 5 characters must be numbers"])]
#[case("abc12345", &["The first 3 characters must be uppercase letters"])]
#[case(
    "ABC123",
    &[
        "License number must be exactly 8 characters long.",
        "The last 5 characters must be numbers",
    ]
)]
fn test_shape_violations_reported_per_rule(#[case] input: &str, #[case] expected: &[&str]) {
    let form = DriverLicenseUpdateForm {
        license_number: input.to_string(),
    };

    let errors = form.validate().unwrap_err();
    assert_eq!(errors["license_number"], expected);
}

#[tokio::test]
async fn test_shape_failure_skips_directory_lookup() {
    init_tracing();

    // The directory would error on any lookup; shape validation fails
    // first, so the result must be a field error, not an outage.
    let form = DriverLicenseUpdateForm {
        license_number: "abc12345".to_string(),
    };
    let err = form.clean(&FailingDirectory).await.unwrap_err();
    assert!(matches!(err, FormError::Invalid(_)));
}

#[tokio::test]
async fn test_directory_outage_is_not_a_field_error() {
    init_tracing();

    let form = DriverLicenseUpdateForm {
        license_number: "ABC12345".to_string(),
    };
    let err = form.clean(&FailingDirectory).await.unwrap_err();
    assert!(matches!(err, FormError::DirectoryUnavailable(_)));
    assert!(err.field_errors().is_none());
}

#[tokio::test]
async fn test_validation_is_idempotent() {
    let directory = MemoryDirectory::with_licenses(["XYZ00000".to_string()]);

    let form = DriverLicenseUpdateForm {
        license_number: "ABC12345".to_string(),
    };

    // No storage mutation between calls: same outcome both times
    let first = form.clean(&directory).await.unwrap();
    let second = form.clean(&directory).await.unwrap();
    assert_eq!(first, second);

    let form = DriverLicenseUpdateForm {
        license_number: "ab123456".to_string(),
    };
    assert_eq!(form.validate(), form.validate());
}

#[tokio::test]
async fn test_accepted_value_is_unchanged() {
    let directory = MemoryDirectory::new();

    let form = DriverLicenseUpdateForm {
        license_number: "QWE98765".to_string(),
    };
    let license = form.clean(&directory).await.unwrap();
    assert_eq!(license.as_ref(), "QWE98765");
}
