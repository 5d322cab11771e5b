/*
 * Bird Flocking Simulation
 *
 * Opens a window and lets a flock of birds loose on it. Edges wrap around,
 * so a bird leaving on the right comes back on the left.
 *
 * Usage: birds [--birds N] [--seed S]
 * Logging is controlled through RUST_LOG, e.g. RUST_LOG=birds=debug.
 */

use anyhow::{Context, Result};
use birds::app::{self, LaunchOptions};
use birds::SimulationParams;
use clap::Parser;

fn main() -> Result<()> {
    init_tracing();

    let options = LaunchOptions::parse();
    SimulationParams::default()
        .validate()
        .context("built-in simulation constants are invalid")?;

    app::launch(options)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
