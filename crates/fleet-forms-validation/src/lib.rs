//! Fleet-Forms-Validation Core
//!
//! Pure validation functions shared by the form layer and the validated
//! newtypes. Nothing here touches storage: shape validation is
//! stateless, and failures are reported per field name so the form
//! layer can surface them next to the offending input.

use std::collections::BTreeMap;

pub mod email;
pub mod license;
pub mod string;

// Re-export all validators
pub use email::*;
pub use license::*;
pub use string::*;

/// Validation errors keyed by field name
///
/// A field can fail more than one rule, so each key maps to the full
/// list of messages for that field. `BTreeMap` keeps iteration order
/// deterministic for rendering and tests.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Core validation trait that all forms implement
pub trait Validate {
    /// Validate the form and return errors by field name
    fn validate(&self) -> Result<(), FieldErrors>;
}
