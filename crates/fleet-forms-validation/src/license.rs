//! License-number shape rules
//!
//! A license number is an 8-character identifier: three uppercase
//! letters followed by five digits (`"ABC12345"`). Each rule is an
//! independent predicate; [`validate_license_number`] runs all of them
//! and reports every rule the candidate violates, so a form can show
//! the user the complete list in one round trip.

use std::fmt;

/// Total length of a license number, in characters.
pub const LICENSE_LENGTH: usize = 8;

/// Leading characters that must be uppercase ASCII letters.
pub const LICENSE_PREFIX_LEN: usize = 3;

/// Trailing characters that must be ASCII digits.
pub const LICENSE_SUFFIX_LEN: usize = 5;

/// A violated license-number rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseViolation {
    /// Length is not exactly 8 characters
    InvalidLength,
    /// The first 3 characters are not all uppercase letters
    InvalidPrefix,
    /// The last 5 characters are not all digits
    InvalidSuffix,
}

impl LicenseViolation {
    /// Stable machine-readable code for the violated rule
    pub fn code(&self) -> &'static str {
        match self {
            LicenseViolation::InvalidLength => "invalid_length",
            LicenseViolation::InvalidPrefix => "invalid_first_three_characters",
            LicenseViolation::InvalidSuffix => "invalid_last_five_characters",
        }
    }

    /// User-facing message for the violated rule
    pub fn message(&self) -> &'static str {
        match self {
            LicenseViolation::InvalidLength => {
                "License number must be exactly 8 characters long."
            }
            LicenseViolation::InvalidPrefix => "The first 3 characters must be uppercase letters",
            LicenseViolation::InvalidSuffix => "The last 5 characters must be numbers",
        }
    }
}

impl fmt::Display for LicenseViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Length rule: exactly 8 characters
pub fn has_valid_length(s: &str) -> bool {
    s.chars().count() == LICENSE_LENGTH
}

/// Prefix rule: the first 3 characters are uppercase ASCII letters
///
/// Strings shorter than 3 characters fail the rule.
pub fn has_uppercase_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    for _ in 0..LICENSE_PREFIX_LEN {
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() => {}
            _ => return false,
        }
    }
    true
}

/// Suffix rule: the last 5 characters are ASCII digits
///
/// Strings shorter than 5 characters fail the rule.
pub fn has_digit_suffix(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < LICENSE_SUFFIX_LEN {
        return false;
    }
    chars[chars.len() - LICENSE_SUFFIX_LEN..]
        .iter()
        .all(|c| c.is_ascii_digit())
}

/// All shape rules hold
pub fn is_valid_license_number(s: &str) -> bool {
    validate_license_number(s).is_ok()
}

/// Run every shape rule and collect each violation, in rule order
///
/// The rules are not mutually exclusive: a candidate can violate several
/// at once and every violated rule is reported.
pub fn validate_license_number(s: &str) -> Result<(), Vec<LicenseViolation>> {
    let rules: [(LicenseViolation, fn(&str) -> bool); 3] = [
        (LicenseViolation::InvalidLength, has_valid_length),
        (LicenseViolation::InvalidPrefix, has_uppercase_prefix),
        (LicenseViolation::InvalidSuffix, has_digit_suffix),
    ];

    let violations: Vec<LicenseViolation> = rules
        .iter()
        .filter(|(_, rule)| !rule(s))
        .map(|(violation, _)| *violation)
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
