//! Common types for release discovery

use std::fmt;

use tracing::error;

use crate::release::error::ReleaseError;

/// Upstream package published as tarballs on the distribution server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// GILDAS sources (gildas-src-jan26a.tar.xz)
    Gildas,
    /// PIIC binaries (piic-exe-jan26a.tar.xz)
    Piic,
}

impl PackageKind {
    /// Returns the string representation of the package kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKind::Gildas => "gildas",
            PackageKind::Piic => "piic",
        }
    }

    /// Tarball filename prefix
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            PackageKind::Gildas => "gildas-src",
            PackageKind::Piic => "piic-exe",
        }
    }

    /// Name of the docker build argument overriding the download location
    pub fn build_arg_name(&self) -> &'static str {
        match self {
            PackageKind::Gildas => "GILDAS_URL",
            PackageKind::Piic => "PIIC_URL",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PackageKind {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gildas" => Ok(PackageKind::Gildas),
            "piic" => Ok(PackageKind::Piic),
            _ => {
                error!("Unknown package '{}' requested", s);
                Err(ReleaseError::UnknownPackage(s.to_string()))
            }
        }
    }
}

/// Distribution directory a tarball is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tree {
    /// Current releases
    Main,
    /// Older releases moved out of the main directory
    Archive,
}

/// Releases known for one package, split by tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTree {
    pub package: PackageKind,
    pub main: Vec<String>,
    pub archive: Vec<String>,
}

impl ReleaseTree {
    pub fn new(package: PackageKind, main: Vec<String>, archive: Vec<String>) -> Self {
        Self {
            package,
            main,
            archive,
        }
    }

    /// Whether the release exists in either tree
    pub fn contains(&self, release: &str) -> bool {
        self.main.iter().any(|r| r == release) || self.archive.iter().any(|r| r == release)
    }
}
