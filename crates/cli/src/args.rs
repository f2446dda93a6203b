//! Command-line arguments for the demo driver.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use popover_dom::Viewport;

/// Interactive driver for the popover widget.
#[derive(Parser, Debug)]
#[command(name = "popover-cli", version, about)]
pub struct Cli {
    /// Path to a TOML file with timing/spacing settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x768")]
    pub viewport: String,

    /// Run commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// Parse a `WIDTHxHEIGHT` viewport spec.
pub fn parse_viewport(spec: &str) -> anyhow::Result<Viewport> {
    let Some((width, height)) = spec.split_once('x') else {
        bail!("viewport must be WIDTHxHEIGHT, got '{spec}'");
    };
    let width: f64 = width
        .trim()
        .parse()
        .with_context(|| format!("invalid viewport width '{width}'"))?;
    let height: f64 = height
        .trim()
        .parse()
        .with_context(|| format!("invalid viewport height '{height}'"))?;
    if width <= 0.0 || height <= 0.0 {
        bail!("viewport dimensions must be positive");
    }
    Ok(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport_accepts_wxh() {
        let viewport = parse_viewport("800x600").unwrap();
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 600.0);
    }

    #[test]
    fn test_parse_viewport_rejects_garbage() {
        assert!(parse_viewport("800").is_err());
        assert!(parse_viewport("x600").is_err());
        assert!(parse_viewport("800x-1").is_err());
        assert!(parse_viewport("wide x tall").is_err());
    }
}
