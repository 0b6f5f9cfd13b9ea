use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gildas_release::app::{RunOptions, run};
use gildas_release::config::{Config, DEFAULT_REPOSITORY};
use gildas_release::release::registries::DockerHubRegistry;
use gildas_release::release::sources::DirectoryListingSource;

#[derive(Parser)]
#[command(name = "gildas-release")]
#[command(
    version,
    about = "Print docker build/push commands for GILDAS releases missing from Docker Hub"
)]
struct Cli {
    /// Specific GILDAS release (e.g. jan26a). If omitted, print commands for all missing releases
    #[arg(long)]
    release: Option<String>,

    /// Enable verbose logging (info and warnings)
    #[arg(short, long)]
    verbose: bool,

    /// Include releases already present on Docker Hub when listing all
    #[arg(short, long)]
    force: bool,

    /// Build from Dockerfile.alpine and use -alpine tags
    #[arg(long)]
    alpine: bool,

    /// Docker Hub repository (user/image)
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    repository: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::INFO } else { Level::ERROR })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::default().with_repository(&cli.repository);
    let source = DirectoryListingSource::new(&config);
    let registry = DockerHubRegistry::new(&config.registry_url);
    let options = RunOptions {
        release: cli.release,
        force: cli.force,
        alpine: cli.alpine,
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(
            &config,
            &source,
            &registry,
            &options,
            &mut std::io::stdout().lock(),
        ))
}
