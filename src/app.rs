//! Command-line run: load the catalog, plan, print

use std::io::Write;

use crate::build::command::{CommandBuilder, Variant};
use crate::build::output::write_commands;
use crate::build::planner::Planner;
use crate::config::Config;
use crate::release::catalog::ReleaseCatalog;
use crate::release::registry::TagRegistry;
use crate::release::source::ReleaseSource;

/// What to print
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Single release to print; every known release when `None`
    pub release: Option<String>,
    /// Keep releases already on the registry (all-releases mode only)
    pub force: bool,
    pub alpine: bool,
}

/// Fetch upstream state once and write the commands to `out`
pub async fn run<S, R, W>(
    config: &Config,
    source: &S,
    registry: &R,
    options: &RunOptions,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ReleaseSource + ?Sized,
    R: TagRegistry + ?Sized,
    W: Write,
{
    let catalog = ReleaseCatalog::load(source, registry, &config.repository).await?;
    let builder = CommandBuilder::new(config, Variant::from_alpine(options.alpine));
    let planner = Planner::new(&catalog, builder);

    let commands = match options.release.as_deref().filter(|r| !r.is_empty()) {
        // Single release mode always reports published images too
        Some(release) => planner.release_commands(release, false)?,
        None => planner.all_commands(!options.force)?,
    };

    write_commands(out, &commands)?;
    Ok(())
}
