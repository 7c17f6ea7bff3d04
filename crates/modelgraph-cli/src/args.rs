//! Command-line argument definitions for the modelgraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, view overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the modelgraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Scale factor, clamped to 0.5..=2.0
    #[arg(long)]
    pub scale: Option<f32>,

    /// Unscaled node width in pixels, clamped to 120..=300
    #[arg(long)]
    pub node_width: Option<f32>,
}
