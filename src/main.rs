//! # Episode Data
//!
//! Builds the JSON files behind the static episode browser from a markdown
//! transcript archive.
//!
//! ## Inputs
//!
//! - `episodes/<slug>/transcript.md`: YAML frontmatter plus transcript text
//! - `index/<topic>.md`: topic pages linking to episode transcripts
//!
//! ## Outputs
//!
//! - `docs/data/episodes.json`: every episode with its full transcript
//! - `docs/data/episodes-index.json`: the same episodes with a short preview
//! - `docs/data/topics.json`: topics and their episodes, busiest first
//!
//! ## Usage
//!
//! ```sh
//! episode_data
//! episode_data --root ../archive
//! ```
//!
//! ## Architecture
//!
//! Two independent batch jobs run one after the other:
//! 1. **Episodes**: Parse every transcript, write the full dataset, then
//!    derive and write the index
//! 2. **Topics**: Extract episode links from every topic page and write them
//!    sorted by link count
//!
//! Every run rebuilds all outputs from scratch.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod builders;
mod cli;
mod config;
mod error;
mod frontmatter;
mod models;
mod outputs;
mod utils;

use cli::Cli;
use config::BuildPaths;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    let paths = BuildPaths::from_cli(&args);
    debug!(?paths, "Resolved build paths");

    info!("Building episode data...");
    let episodes = builders::episodes::build(&paths).inspect_err(|e| {
        error!(error = %e, "Episode build failed");
    })?;

    info!("Building topic data...");
    let topics = builders::topics::build(&paths).inspect_err(|e| {
        error!(error = %e, "Topic build failed");
    })?;

    let elapsed = start_time.elapsed();
    info!(
        episodes = episodes.len(),
        topics = topics.len(),
        millis = elapsed.as_millis() as u64,
        "Done! Data files created in {}",
        paths.output_dir.display()
    );

    Ok(())
}
