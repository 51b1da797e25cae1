//! Validated domain types for the taxi-fleet forms
//!
//! Newtype wrappers built with the `nutype` crate. The constraint is
//! enforced at construction time, so a [`LicenseNumber`] in hand is
//! always a shape-valid license number; there is no way to smuggle an
//! unchecked string past the type.
//!
//! The predicates live in `fleet-forms-validation`. The form layer
//! runs the same rules one by one to report individual violations,
//! while the types here apply them as a single gate.

use nutype::nutype;

use fleet_forms_validation::license::is_valid_license_number;

/// A driver's license number
///
/// Exactly 8 characters: three uppercase letters followed by five
/// digits (`"ABC12345"`). Construction fails for any string violating a
/// shape rule.
///
/// # Example
///
/// ```rust,ignore
/// use fleet_forms_types::LicenseNumber;
///
/// let license = LicenseNumber::try_new("ABC12345".to_string())?; // ✓
///
/// let lowercase = LicenseNumber::try_new("abc12345".to_string()); // ✗
/// let short = LicenseNumber::try_new("ABC123".to_string());       // ✗
/// ```
#[nutype(
    validate(predicate = is_valid_license_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct LicenseNumber(String);
