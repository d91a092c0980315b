use std::path::PathBuf;

use anyhow::{Context, Result};
use campclean_core::pipeline;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bank marketing campaign data cleaner", long_about = None)]
struct Cli {
    /// Directory holding csv.zip archives (or bare .csv files)
    #[arg(long, default_value = pipeline::DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the client/campaign/economics outputs are written to
    #[arg(long, default_value = pipeline::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    pipeline::run(&cli.input_dir, &cli.output_dir).context("campaign cleaning run failed")?;
    info!(output_dir = %cli.output_dir.display(), "campaign data cleaned");
    Ok(())
}
