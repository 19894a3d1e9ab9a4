//! Petprobe binary.

use std::process::ExitCode;

use clap::Parser;
use petprobe::{Args, exit_code, render_summary};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    tracing::info!("Starting petprobe v{}", env!("CARGO_PKG_VERSION"));

    match petprobe::run(&args).await {
        Ok(report) => {
            println!("{}", render_summary(&report));
            exit_code(&report)
        }
        Err(e) => {
            tracing::error!(error = %e, "run aborted");
            ExitCode::FAILURE
        }
    }
}
