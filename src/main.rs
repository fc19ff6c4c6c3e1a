use clap::Parser;
use std::path::PathBuf;

use respimg::config::{GeneratorConfig, DEFAULT_SOURCE, SIZES};
use respimg::generator;

/// Generate responsive square WebP variants for a source image
#[derive(Parser, Debug)]
#[command(name = "respimg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source image
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory to write variants into (defaults to the source's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    // Initialize logging subsystem
    respimg::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    let args = Args::parse();

    let config = GeneratorConfig {
        source: args.source,
        output_dir: args.output_dir,
    };

    tracing::debug!(
        source = %config.source.display(),
        sizes = SIZES.len(),
        "starting variant generation"
    );

    if let Err(e) = generator::generate(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
