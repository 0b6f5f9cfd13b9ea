//! Main/archive classification of a release for one package

use crate::release::error::ReleaseError;
use crate::release::types::ReleaseTree;

/// Where a release tarball can be downloaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Served from the main distribution directory
    Main,
    /// Only served from the archive directory
    Archive,
}

/// Locate a release in a package's trees
///
/// The main tree wins when a release is listed in both.
pub fn locate(tree: &ReleaseTree, release: &str) -> Result<Availability, ReleaseError> {
    if tree.main.iter().any(|r| r == release) {
        return Ok(Availability::Main);
    }
    if tree.archive.iter().any(|r| r == release) {
        return Ok(Availability::Archive);
    }
    Err(ReleaseError::NotFound {
        package: tree.package,
        release: release.to_string(),
    })
}

/// Build argument selecting the download location of a release
///
/// # Returns
/// * `Ok(None)` - Release is in the main tree, the image default applies
/// * `Ok(Some(arg))` - `--build-arg <ARG_NAME>=<archive_url>` for archived releases
/// * `Err(ReleaseError::NotFound)` - Release is in neither tree
pub fn archive_build_arg(
    tree: &ReleaseTree,
    release: &str,
    archive_url: &str,
) -> Result<Option<String>, ReleaseError> {
    match locate(tree, release)? {
        Availability::Main => Ok(None),
        Availability::Archive => Ok(Some(format!(
            "--build-arg {}={}",
            tree.package.build_arg_name(),
            archive_url
        ))),
    }
}
