//! Popover demo driver.
//!
//! Responsibilities:
//! - Build the demo document and bind a popover controller to it.
//! - Feed pointer/key/clock commands from stdin or a script file.
//!
//! Does NOT handle:
//! - Widget behavior (see `crates/widget`).
//! - Real rendering; layout rectangles are assigned by the scene module.

mod args;
mod repl;
mod scene;

use std::fs;
use std::io::{BufReader, stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use popover_widget::{PopoverConfig, PopoverController};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = args::Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str::<PopoverConfig>(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => PopoverConfig::default(),
    };

    let viewport = args::parse_viewport(&cli.viewport)?;
    let (mut doc, triggers) = scene::build(viewport);
    let mut controller = PopoverController::bind(&doc, config);

    match &cli.script {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open script file {}", path.display()))?;
            repl::run(
                &mut doc,
                &mut controller,
                &triggers,
                BufReader::new(file),
                stdout(),
            )
        }
        None => repl::run(&mut doc, &mut controller, &triggers, stdin().lock(), stdout()),
    }
}
