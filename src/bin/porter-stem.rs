//! porter-stem CLI binary.

use clap::Parser;
use porter_stem::cli::{args::*, commands::*};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments using clap
    let args = StemArgs::parse();

    // RUST_LOG wins; otherwise the filter follows the verbosity flags
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.default_log_filter())),
        )
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
