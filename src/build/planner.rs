//! Selection of the build commands to print
//!
//! Two modes:
//! - all releases: every release found upstream, optionally limited to the
//!   images missing from the registry
//! - single release: both image flavours of one release

use tracing::{debug, warn};

use crate::build::command::{BuildCommand, CommandBuilder, Section, image_tag};
use crate::release::catalog::ReleaseCatalog;
use crate::release::error::ReleaseError;
use crate::release::ordering::sort_by_release;

/// Builds the command list for a loaded catalog
pub struct Planner<'a> {
    catalog: &'a ReleaseCatalog,
    builder: CommandBuilder<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a ReleaseCatalog, builder: CommandBuilder<'a>) -> Self {
        Self { catalog, builder }
    }

    /// Commands for one release, GILDAS only first, then with PIIC
    ///
    /// # Arguments
    /// * `release` - Release identifier (e.g. "jan26a")
    /// * `missing_only` - Drop commands whose image tag is already published
    pub fn release_commands(
        &self,
        release: &str,
        missing_only: bool,
    ) -> Result<Vec<BuildCommand>, ReleaseError> {
        let gildas = &self.catalog.gildas;
        let piic = &self.catalog.piic;
        let mut commands = Vec::new();

        if !gildas.contains(release) && !piic.contains(release) {
            warn!("Release '{}' is not available upstream", release);
            return Ok(commands);
        }

        if gildas.contains(release) {
            let command = self.builder.without_piic(gildas, release)?;
            self.push(&mut commands, Section::WithoutPiic, release, command, missing_only);
        }

        if piic.contains(release) {
            if let Some(command) = self.builder.with_piic(gildas, piic, release) {
                self.push(&mut commands, Section::WithPiic, release, command, missing_only);
            }
        }

        Ok(commands)
    }

    /// Commands for every known release, oldest release first
    pub fn all_commands(&self, missing_only: bool) -> Result<Vec<BuildCommand>, ReleaseError> {
        let mut commands = Vec::new();
        for release in self.catalog.all_releases() {
            commands.extend(self.release_commands(release, missing_only)?);
        }

        // Stable, so each release keeps its sections in order
        sort_by_release(&mut commands, |c| c.release.as_str());

        Ok(commands)
    }

    fn push(
        &self,
        commands: &mut Vec<BuildCommand>,
        section: Section,
        release: &str,
        command: String,
        missing_only: bool,
    ) {
        let variant = self.builder.variant();
        let tag = image_tag(release, section, variant);
        let in_dockerhub = self.catalog.is_published(&tag);

        if missing_only && in_dockerhub {
            debug!("{} ({}) already published, skipping", tag, section.as_str());
            return;
        }

        commands.push(BuildCommand {
            section,
            release: release.to_string(),
            in_dockerhub,
            command,
            alpine: variant.is_alpine(),
        });
    }
}
