//! # fleet-forms
//!
//! Form validation for a small taxi-fleet management application:
//! driver and car forms with license-number shape rules and a
//! uniqueness check against the driver directory.
//!
//! Shape validation is pure and collects every violated rule per field.
//! The uniqueness check runs afterwards, through the
//! [`DriverDirectory`](fleet_registry::DriverDirectory) seam, and only
//! once the shape rules pass.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleet_forms::{DriverCreateForm, FormError, Validate};
//! use fleet_registry::MemoryDirectory;
//!
//! let form = DriverCreateForm {
//!     username: "jdoe".to_string(),
//!     first_name: "Jane".to_string(),
//!     last_name: "Doe".to_string(),
//!     email: "jdoe@fleet.example".to_string(),
//!     license_number: "ABC12345".to_string(),
//! };
//!
//! let directory = MemoryDirectory::new();
//! let license = form.clean(&directory).await?;
//! directory.register_license(license.as_ref()).await?;
//! ```

pub mod car;
pub mod driver;
pub mod error;
pub mod pipeline;

pub use car::CarCreateForm;
pub use driver::{DriverCreateForm, DriverLicenseUpdateForm};
pub use error::FormError;
pub use pipeline::{validate_request, FormContext, FormData, ValidationPipelineResult};

// Re-export the pieces callers need alongside the forms
pub use fleet_forms_types::LicenseNumber;
pub use fleet_forms_validation::{FieldErrors, Validate};
