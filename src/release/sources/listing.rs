//! IRAM directory listing scraper
//!
//! The distribution server exposes plain Apache-style index pages. Release
//! identifiers are read from tarball links such as
//! `gildas-src-jan26a.tar.xz` or `piic-exe-jun23b.tar.xz`.

use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::{Config, SPURIOUS_RELEASE};
use crate::release::error::RegistryError;
use crate::release::source::ReleaseSource;
use crate::release::types::{PackageKind, Tree};

/// Release source reading tarball links from the distribution directory pages
pub struct DirectoryListingSource {
    client: reqwest::Client,
    config: Config,
    /// Regex for anchor targets: `<a ... href="...">`, `href='...'` or `href=...`
    anchor_re: Regex,
}

impl DirectoryListingSource {
    /// Creates a source reading the listings configured in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("gildas-release")
                .build()
                .expect("Failed to create HTTP client"),
            config: config.clone(),
            // The attribute name must follow whitespace so `data-href` is not read as `href`
            anchor_re: Regex::new(
                r#"(?is)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
            )
            .expect("anchor pattern is valid"),
        }
    }

    /// Extracts release identifiers from a listing page, in page order
    pub fn parse_listing(&self, package: PackageKind, html: &str) -> Vec<String> {
        let prefix = package.filename_prefix();

        self.anchor_re
            .captures_iter(html)
            .filter_map(|caps| {
                caps.get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str())
            })
            .filter(|href| href.contains(".tar.xz") && href.starts_with(prefix))
            .filter_map(|filename| {
                let token = release_token(filename);
                if token.is_none() {
                    debug!("Ignoring tarball without release segment: {}", filename);
                }
                token
            })
            .filter(|token| *token != SPURIOUS_RELEASE)
            .map(str::to_string)
            .collect()
    }
}

impl Default for DirectoryListingSource {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Third hyphen-delimited segment of the filename, cut at the first dot
fn release_token(filename: &str) -> Option<&str> {
    let segment = filename.split('-').nth(2)?;
    segment.split('.').next().filter(|token| !token.is_empty())
}

#[async_trait::async_trait]
impl ReleaseSource for DirectoryListingSource {
    async fn fetch_releases(
        &self,
        package: PackageKind,
        tree: Tree,
    ) -> Result<Vec<String>, RegistryError> {
        let url = self.config.listing_url(package, tree);
        debug!("Fetching {} listing ({:?}): {}", package, tree, url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            warn!("Distribution server returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;
        let releases = self.parse_listing(package, &body);

        info!(
            "Found {} {} releases in {:?} tree",
            releases.len(),
            package,
            tree
        );

        Ok(releases)
    }
}
