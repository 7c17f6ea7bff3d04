//! CLI logic for the modelgraph tool.
//!
//! Reads an authorization model file, builds its graph and writes the
//! rendered scene as SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use modelgraph::{ModelGraphError, Visualization};

/// Run the modelgraph CLI application
///
/// Command-line view overrides replace the configured defaults, so they also
/// survive a reset.
///
/// # Errors
///
/// Returns `ModelGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - SVG export errors
pub fn run(args: &Args) -> Result<(), ModelGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing model"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(scale) = args.scale {
        app_config.view_mut().set_scale(scale);
    }
    if let Some(node_width) = args.node_width {
        app_config.view_mut().set_node_width(node_width);
    }

    let source = fs::read_to_string(&args.input)?;

    let mut graph = Visualization::new(app_config)?;
    graph.refresh(&source);
    graph.save_svg(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
