use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sample_cut::cut_videos_into_clips;

/// Cut videos into clips of specified duration.
#[derive(Parser)]
#[command(name = "video_clipper", version)]
struct Cli {
    /// Path to folder containing input videos
    input_folder: PathBuf,

    /// Path to folder where clips will be saved
    output_folder: PathBuf,

    /// Duration of each clip in seconds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    duration: u32,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    if let Err(e) = cut_videos_into_clips(&cli.input_folder, &cli.output_folder, cli.duration) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
