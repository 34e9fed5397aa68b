//! Gym registry batch runner
//!
//! Reads the command file, runs every command, and writes the report.
//! Logs go to stderr.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gym_registry::adapters::{FsReportStore, InMemoryRegistry};
use gym_registry::app::{help_text, BatchService};
use gym_registry::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print!("{}", help_text());
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,gym_registry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_args(args);
    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "Processing command file"
    );

    let store = Arc::new(FsReportStore::new(config.input_path, config.output_path));
    let service = BatchService::new(store);

    if let Err(e) = service.run(InMemoryRegistry::new()).await {
        tracing::error!("Error processing input file: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
