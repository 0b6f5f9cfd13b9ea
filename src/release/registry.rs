//! Registry trait for fetching the image tags already published

#[cfg(test)]
use mockall::automock;

use crate::release::error::RegistryError;

/// Trait for listing the tags of an image repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagRegistry: Send + Sync {
    /// Fetches the published tags, without the reserved floating tags
    ///
    /// # Arguments
    /// * `repository` - Repository in the form `user/image`
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}
