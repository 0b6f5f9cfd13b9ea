use thiserror::Error;

use crate::release::types::PackageKind;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("{package} release '{release}' not found in main or archive trees")]
    NotFound {
        package: PackageKind,
        release: String,
    },

    #[error("Unknown package '{0}'")]
    UnknownPackage(String),
}
