use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sample_cut::copy_random_files;

/// Copy random files from source to output directory.
#[derive(Parser)]
#[command(name = "random_files", version)]
struct Cli {
    /// Source directory path
    source_dir: PathBuf,

    /// Output directory path
    output_dir: PathBuf,

    /// Number of random files to copy
    count: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    if let Err(e) = copy_random_files(&cli.source_dir, &cli.output_dir, cli.count) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
