// src/bin/cli.rs
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    cbsl_scrape::cli::run().map_err(|e| eyre!("{e}"))
}
