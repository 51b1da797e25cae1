//! Driver directory backends
//!
//! The form layer checks license-number uniqueness through the
//! [`DriverDirectory`] trait; where the records actually live stays
//! behind it. Lookup failures are infrastructure errors, distinct from
//! a duplicate result.

use anyhow::Result;
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryDirectory;

/// Trait for driver directory backends
#[async_trait]
pub trait DriverDirectory: Send + Sync {
    /// Check whether a driver with this license number is already stored
    async fn license_exists(&self, license_number: &str) -> Result<bool>;

    /// Insert a license number if it is absent
    ///
    /// Returns `false` and leaves the directory unchanged when the value
    /// is already present. The presence check and the insert are atomic,
    /// so two concurrent registrations of the same number cannot both
    /// succeed.
    async fn register_license(&self, license_number: &str) -> Result<bool>;

    /// Get directory backend name
    fn name(&self) -> &'static str;
}
