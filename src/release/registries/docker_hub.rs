//! Docker Hub v2 API registry implementation

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{Config, RESERVED_TAGS, TAG_PAGE_SIZE};
use crate::release::error::RegistryError;
use crate::release::registry::TagRegistry;

/// Response from the repository tags endpoint
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    results: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Registry implementation for the Docker Hub API
pub struct DockerHubRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl DockerHubRegistry {
    /// Creates a new DockerHubRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gildas-release")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for DockerHubRegistry {
    fn default() -> Self {
        Self::new(&Config::default().registry_url)
    }
}

#[async_trait::async_trait]
impl TagRegistry for DockerHubRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        // Only the first page is read; a repository beyond TAG_PAGE_SIZE tags
        // would see its oldest tags reported as missing.
        let url = format!(
            "{}/v2/repositories/{}/tags/?page_size={}",
            self.base_url, repository, TAG_PAGE_SIZE
        );
        debug!("Fetching Docker Hub tags: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository.to_string()));
        }

        if !status.is_success() {
            warn!("Docker Hub returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let tags: TagsResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Docker Hub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let tags: Vec<String> = tags
            .results
            .into_iter()
            .map(|tag| tag.name)
            .filter(|name| !RESERVED_TAGS.contains(&name.as_str()))
            .collect();

        debug!("Found {} published tags for {}", tags.len(), repository);

        Ok(tags)
    }
}
