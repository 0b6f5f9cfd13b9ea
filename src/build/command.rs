//! Docker build/push command formatting

use tracing::warn;

use crate::config::Config;
use crate::release::classifier::archive_build_arg;
use crate::release::error::ReleaseError;
use crate::release::types::{PackageKind, ReleaseTree};

/// Output section, one per image flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// GILDAS only image
    WithoutPiic,
    /// GILDAS image bundling PIIC
    WithPiic,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::WithoutPiic, Section::WithPiic];

    /// Returns the string representation of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::WithoutPiic => "without-piic",
            Section::WithPiic => "with-piic",
        }
    }

    /// Header line printed before the section's commands
    pub fn header(&self) -> &'static str {
        match self {
            Section::WithoutPiic => "# Without piic",
            Section::WithPiic => "# With piic",
        }
    }

    /// Dockerfile stage to build
    pub fn target(&self) -> &'static str {
        match self {
            Section::WithoutPiic => "gildas",
            Section::WithPiic => "gildas-piic",
        }
    }

    fn tag_suffix(&self) -> &'static str {
        match self {
            Section::WithoutPiic => "",
            Section::WithPiic => "-piic",
        }
    }
}

/// Base image flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Standard,
    Alpine,
}

impl Variant {
    pub fn from_alpine(alpine: bool) -> Self {
        if alpine {
            Variant::Alpine
        } else {
            Variant::Standard
        }
    }

    pub fn is_alpine(&self) -> bool {
        *self == Variant::Alpine
    }

    pub fn dockerfile(&self) -> &'static str {
        match self {
            Variant::Standard => "Dockerfile",
            Variant::Alpine => "Dockerfile.alpine",
        }
    }

    fn tag_suffix(&self) -> &'static str {
        match self {
            Variant::Standard => "",
            Variant::Alpine => "-alpine",
        }
    }
}

/// Image tag for a release (or `latest`) in a section and variant
///
/// Examples:
/// - ("jun23b", WithoutPiic, Standard) -> "jun23b"
/// - ("latest", WithPiic, Standard) -> "latest-piic"
/// - ("jun23b", WithPiic, Alpine) -> "jun23b-piic-alpine"
pub fn image_tag(base: &str, section: Section, variant: Variant) -> String {
    format!("{}{}{}", base, section.tag_suffix(), variant.tag_suffix())
}

/// A build/push command line and the state of its image on the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub section: Section,
    pub release: String,
    /// Whether the release tag is already published
    pub in_dockerhub: bool,
    pub command: String,
    pub alpine: bool,
}

impl BuildCommand {
    /// Image tag this command publishes for its release
    pub fn tag(&self) -> String {
        image_tag(&self.release, self.section, Variant::from_alpine(self.alpine))
    }
}

/// Formats the shell commands building and pushing release images
pub struct CommandBuilder<'a> {
    config: &'a Config,
    variant: Variant,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a Config, variant: Variant) -> Self {
        Self { config, variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Command for the GILDAS only image
    ///
    /// Fails when the release is in neither GILDAS tree.
    pub fn without_piic(&self, gildas: &ReleaseTree, release: &str) -> Result<String, ReleaseError> {
        let gildas_arg = archive_build_arg(
            gildas,
            release,
            self.config.archive_url(PackageKind::Gildas),
        )?;

        Ok(self.render(Section::WithoutPiic, release, gildas_arg.into_iter()))
    }

    /// Command for the image bundling PIIC
    ///
    /// Returns `None` when either package lacks the release: many GILDAS
    /// releases have no PIIC counterpart.
    pub fn with_piic(
        &self,
        gildas: &ReleaseTree,
        piic: &ReleaseTree,
        release: &str,
    ) -> Option<String> {
        let gildas_arg = match archive_build_arg(
            gildas,
            release,
            self.config.archive_url(PackageKind::Gildas),
        ) {
            Ok(arg) => arg,
            Err(e) => {
                warn!("Skipping PIIC build for {}: {}", release, e);
                return None;
            }
        };

        let piic_arg = match archive_build_arg(
            piic,
            release,
            self.config.archive_url(PackageKind::Piic),
        ) {
            Ok(arg) => arg,
            Err(e) => {
                warn!("Skipping PIIC build for {} (no PIIC archive): {}", release, e);
                return None;
            }
        };

        Some(self.render(
            Section::WithPiic,
            release,
            gildas_arg.into_iter().chain(piic_arg),
        ))
    }

    fn render(
        &self,
        section: Section,
        release: &str,
        build_args: impl Iterator<Item = String>,
    ) -> String {
        let repository = &self.config.repository;
        let tag = image_tag(release, section, self.variant);
        let latest = image_tag("latest", section, self.variant);

        let mut parts = vec![
            format!("export release={};", release),
            "docker build".to_string(),
            format!("--tag {}:{}", repository, tag),
            format!("--tag {}:{}", repository, latest),
            format!("--target {}", section.target()),
        ];
        parts.extend(build_args);
        parts.extend([
            "--build-arg release=$release".to_string(),
            format!("-f {} .", self.variant.dockerfile()),
            format!("&& docker push {}:{}", repository, tag),
            format!("&& docker push {}:{}", repository, latest),
        ]);

        parts.join(" ")
    }
}
