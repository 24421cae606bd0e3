use crate::components::normalizer::{NormalizedData, NormalizerHandle};
use crate::config::Config;
use crate::error::Error;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// Export submodules
pub mod report;

pub use report::render_summary;

#[derive(Parser, Debug)]
#[command(name = "mpi-normalizer")]
#[command(
    author,
    version,
    about = "Normalize payroll and appointment workbooks into canonical records"
)]
pub struct Cli {
    /// Print the canonical collections as JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch both workbooks from the configured base URL
    Remote,

    /// Load both workbooks from local files
    Files {
        /// Payroll workbook (summary sheet followed by one sheet per employee)
        payroll: PathBuf,

        /// Appointment workbook
        appointments: PathBuf,

        /// Return the result without committing it to the published state
        #[arg(long)]
        preview: bool,
    },
}

/// Run one CLI invocation against a fresh normalizer
pub async fn run(cli: Cli, config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let handle = NormalizerHandle::new(config);

    let result = match cli.command {
        Commands::Remote => handle.load_remote().await,
        Commands::Files {
            payroll,
            appointments,
            preview,
        } => {
            if preview {
                info!("Preview load, published state stays untouched");
            }
            handle
                .load_file_paths(payroll, appointments, !preview)
                .await
        }
    };

    handle.shutdown().await?;
    let data = result?;

    println!("{}", render(&data, cli.json)?);
    Ok(())
}

fn render(data: &NormalizedData, json: bool) -> Result<String, Error> {
    if json {
        Ok(serde_json::to_string_pretty(data)?)
    } else {
        Ok(render_summary(data))
    }
}
