use clap::Parser;
use mpi_normalizer::commands::{self, Cli};
use mpi_normalizer::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting mpi-normalizer");

    // Load configuration
    let config = startup::load_config().await?;

    commands::run(cli, config).await
}
