//! Stub collaborators replacing the distribution server and Docker Hub

use std::collections::HashMap;

use async_trait::async_trait;

use gildas_release::release::error::RegistryError;
use gildas_release::release::registry::TagRegistry;
use gildas_release::release::source::ReleaseSource;
use gildas_release::release::types::{PackageKind, Tree};

/// Release source serving fixed listings; unset listings are empty
#[derive(Default)]
pub struct StubSource {
    releases: HashMap<(PackageKind, Tree), Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(mut self, package: PackageKind, tree: Tree, releases: Vec<&str>) -> Self {
        self.releases.insert(
            (package, tree),
            releases.into_iter().map(|r| r.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl ReleaseSource for StubSource {
    async fn fetch_releases(
        &self,
        package: PackageKind,
        tree: Tree,
    ) -> Result<Vec<String>, RegistryError> {
        Ok(self.releases.get(&(package, tree)).cloned().unwrap_or_default())
    }
}

/// Tag registry returning fixed tags, or failing like an unreachable registry
pub struct StubRegistry {
    tags: Option<Vec<String>>,
}

impl StubRegistry {
    pub fn with_tags(tags: Vec<&str>) -> Self {
        Self {
            tags: Some(tags.into_iter().map(|t| t.to_string()).collect()),
        }
    }

    pub fn unavailable() -> Self {
        Self { tags: None }
    }
}

#[async_trait]
impl TagRegistry for StubRegistry {
    async fn fetch_tags(&self, _repository: &str) -> Result<Vec<String>, RegistryError> {
        match &self.tags {
            Some(tags) => Ok(tags.clone()),
            None => Err(RegistryError::InvalidResponse(
                "Unexpected status: 503 Service Unavailable".to_string(),
            )),
        }
    }
}
