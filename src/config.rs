use crate::release::types::{PackageKind, Tree};

// =============================================================================
// Upstream locations
// =============================================================================

/// Main distribution tree, shared by GILDAS and PIIC tarballs
pub const DIST_URL: &str = "https://www.iram.fr/~gildas/dist/";

/// Archive tree for older GILDAS releases
pub const GILDAS_ARCHIVE_URL: &str = "https://www.iram.fr/~gildas/dist/archive/gildas";

/// Archive tree for older PIIC releases
pub const PIIC_ARCHIVE_URL: &str = "https://www.iram.fr/~gildas/dist/archive/piic";

/// Docker Hub API base URL
pub const DOCKER_HUB_URL: &str = "https://registry.hub.docker.com";

// =============================================================================
// Registry constants
// =============================================================================

/// Repository the images are published to
pub const DEFAULT_REPOSITORY: &str = "abeelen/gildas";

/// Number of tags requested in the single Docker Hub page
pub const TAG_PAGE_SIZE: u32 = 1000;

/// Floating tags that never correspond to a release
pub const RESERVED_TAGS: [&str; 2] = ["latest", "build"];

/// Token produced by `piic-exe-ifort-*` tarballs, not a release
pub const SPURIOUS_RELEASE: &str = "ifort";

/// Runtime configuration, assembled from command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Docker Hub repository (`user/image`)
    pub repository: String,
    /// Docker Hub API base URL
    pub registry_url: String,
    pub dist_url: String,
    pub gildas_archive_url: String,
    pub piic_archive_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            registry_url: DOCKER_HUB_URL.to_string(),
            dist_url: DIST_URL.to_string(),
            gildas_archive_url: GILDAS_ARCHIVE_URL.to_string(),
            piic_archive_url: PIIC_ARCHIVE_URL.to_string(),
        }
    }
}

impl Config {
    /// Returns a config pointing at another Docker Hub repository
    pub fn with_repository(mut self, repository: &str) -> Self {
        self.repository = repository.to_string();
        self
    }

    /// Archive tree URL, also passed to the image build as a build argument
    pub fn archive_url(&self, package: PackageKind) -> &str {
        match package {
            PackageKind::Gildas => &self.gildas_archive_url,
            PackageKind::Piic => &self.piic_archive_url,
        }
    }

    /// Directory listing to scrape for the given package and tree
    pub fn listing_url(&self, package: PackageKind, tree: Tree) -> &str {
        match tree {
            Tree::Main => &self.dist_url,
            Tree::Archive => self.archive_url(package),
        }
    }
}
