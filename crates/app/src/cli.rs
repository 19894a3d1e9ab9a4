//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Runs the Pet Store integration scenarios against a live API.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "petprobe", version)]
#[command(about = "Runs the Pet Store REST API integration scenarios", long_about = None)]
pub struct Args {
    /// TOML settings file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// API root, overriding the configured value
    #[arg(short = 'b', long)]
    pub base_url: Option<String>,

    /// Stop at the first failing scenario
    #[arg(long)]
    pub stop_on_failure: bool,

    /// Image uploaded by the upload scenario; a bundled PNG is used otherwise
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,
}
