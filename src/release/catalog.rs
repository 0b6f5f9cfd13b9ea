//! Release catalog for a single run
//!
//! Holds the four upstream release lists and the set of published tags.
//! It is loaded once and passed by reference to every classification, so a
//! run performs each fetch exactly once.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::info;

use crate::release::error::RegistryError;
use crate::release::registry::TagRegistry;
use crate::release::source::ReleaseSource;
use crate::release::types::{PackageKind, ReleaseTree, Tree};

/// Upstream releases and published image tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCatalog {
    pub gildas: ReleaseTree,
    pub piic: ReleaseTree,
    /// Published tags, reserved floating tags excluded
    pub tags: HashSet<String>,
}

impl ReleaseCatalog {
    pub fn new(gildas: ReleaseTree, piic: ReleaseTree, tags: HashSet<String>) -> Self {
        Self { gildas, piic, tags }
    }

    /// Fetch the published tags and the four release listings, sequentially
    pub async fn load<S, R>(
        source: &S,
        registry: &R,
        repository: &str,
    ) -> Result<Self, RegistryError>
    where
        S: ReleaseSource + ?Sized,
        R: TagRegistry + ?Sized,
    {
        let tags: HashSet<String> = registry.fetch_tags(repository).await?.into_iter().collect();

        let gildas = ReleaseTree::new(
            PackageKind::Gildas,
            source.fetch_releases(PackageKind::Gildas, Tree::Main).await?,
            source.fetch_releases(PackageKind::Gildas, Tree::Archive).await?,
        );
        let piic = ReleaseTree::new(
            PackageKind::Piic,
            source.fetch_releases(PackageKind::Piic, Tree::Main).await?,
            source.fetch_releases(PackageKind::Piic, Tree::Archive).await?,
        );

        info!(
            "Loaded {} published tags, {}+{} gildas and {}+{} piic releases",
            tags.len(),
            gildas.main.len(),
            gildas.archive.len(),
            piic.main.len(),
            piic.archive.len()
        );

        Ok(Self::new(gildas, piic, tags))
    }

    /// Whether an image tag is already on the registry
    pub fn is_published(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Every known release, first occurrence wins
    ///
    /// Lists are visited as gildas archive, gildas main, piic archive, piic main.
    pub fn all_releases(&self) -> Vec<&str> {
        let releases: IndexSet<&str> = [
            &self.gildas.archive,
            &self.gildas.main,
            &self.piic.archive,
            &self.piic.main,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();

        releases.into_iter().collect()
    }
}
