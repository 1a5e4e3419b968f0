use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use templatefill::TemplateDefaulter;
use templatefill::cli::Cli;
use templatefill::config::Config;

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    // stdout is reserved for the per-template notices
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Paths on the command line replace the configured list
    let templates = if cli.paths.is_empty() { config.templates } else { cli.paths };

    let defaulter = TemplateDefaulter::new(templates).with_dry_run(cli.dry_run);
    info!(count = defaulter.paths().len(), dry_run = cli.dry_run, "templatefill starting");

    defaulter.run(&mut std::io::stdout().lock())?;

    Ok(())
}
