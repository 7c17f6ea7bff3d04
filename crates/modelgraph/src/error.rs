//! Error types for modelgraph operations.
//!
//! Extraction, layout, rendering and interaction never fail. The
//! [`ModelGraphError`] type covers the edges of the system: reading and
//! writing files, and invalid configuration.

use std::io;

use thiserror::Error;

/// The main error type for modelgraph operations.
#[derive(Debug, Error)]
pub enum ModelGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}
