// Kinetic - phrase-pair style assessment
// Main entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kinetic::cli::{run, Cli};
use kinetic::config::{load_config, load_config_from};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.app_dir {
        Some(dir) => load_config_from(dir)?,
        None => load_config()?,
    };

    // Logs go to stderr so JSON output on stdout stays clean
    let default_level = if cli.verbose || config.debug_logging {
        "kinetic=debug"
    } else {
        "kinetic=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Results directory: {:?}", config.results_dir);

    run(cli, config)
}
