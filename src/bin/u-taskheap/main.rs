mod cli;
mod config;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::info;

use u_taskheap::TaskScheduler;

use crate::cli::CliArgs;
use crate::config::ConsoleConfig;
use crate::console::Console;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = ConsoleConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    config.apply_args(&args);

    let mut scheduler = TaskScheduler::new();
    if config.seed_examples {
        console::seed_examples(&mut scheduler)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), scheduler, config.list_format);
    console.run()?;

    let stats = console.into_scheduler().stats();
    info!(
        pending = stats.pending,
        dispatched = stats.dispatched(),
        "Session ended"
    );
    Ok(())
}
