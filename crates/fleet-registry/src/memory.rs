//! In-memory driver directory backend

use crate::DriverDirectory;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory directory backend
///
/// Stores license numbers in a HashSet. Fast but non-persistent -
/// contents are lost on restart.
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    licenses: Arc<RwLock<HashSet<String>>>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with existing license numbers
    pub fn with_licenses<I>(licenses: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            licenses: Arc::new(RwLock::new(licenses.into_iter().collect())),
        }
    }

    /// Number of stored license numbers
    pub async fn len(&self) -> usize {
        self.licenses.read().await.len()
    }

    /// True when no license numbers are stored
    pub async fn is_empty(&self) -> bool {
        self.licenses.read().await.is_empty()
    }
}

#[async_trait]
impl DriverDirectory for MemoryDirectory {
    async fn license_exists(&self, license_number: &str) -> Result<bool> {
        let licenses = self.licenses.read().await;
        Ok(licenses.contains(license_number))
    }

    async fn register_license(&self, license_number: &str) -> Result<bool> {
        let mut licenses = self.licenses.write().await;
        Ok(licenses.insert(license_number.to_string()))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_directory_basic() {
        let directory = MemoryDirectory::new();

        assert!(!directory.license_exists("ABC12345").await.unwrap());

        assert!(directory.register_license("ABC12345").await.unwrap());
        assert!(directory.license_exists("ABC12345").await.unwrap());
        assert!(!directory.license_exists("XYZ00000").await.unwrap());
    }

    #[tokio::test]
    async fn test_second_registration_rejected() {
        let directory = MemoryDirectory::new();

        assert!(directory.register_license("ABC12345").await.unwrap());
        assert!(!directory.register_license("ABC12345").await.unwrap());
        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_seeded_directory() {
        let directory =
            MemoryDirectory::with_licenses(["ABC12345".to_string(), "XYZ00000".to_string()]);

        assert_eq!(directory.len().await, 2);
        assert!(directory.license_exists("XYZ00000").await.unwrap());
        assert!(!directory.is_empty().await);
    }
}
