//! Source trait for listing the releases published upstream

#[cfg(test)]
use mockall::automock;

use crate::release::error::RegistryError;
use crate::release::types::{PackageKind, Tree};

/// Trait for listing the release identifiers available for a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the release identifiers served from one tree
    ///
    /// # Arguments
    /// * `package` - Package whose tarballs are listed
    /// * `tree` - Main distribution directory or archive directory
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Identifiers in page order, duplicates kept
    /// * `Err(RegistryError)` - If the listing cannot be fetched
    async fn fetch_releases(
        &self,
        package: PackageKind,
        tree: Tree,
    ) -> Result<Vec<String>, RegistryError>;
}
