//! Error adapter for converting ModelGraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Modelgraph errors
//! carry no source spans, so every error becomes a single diagnostic with a
//! stable code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use modelgraph::ModelGraphError;

/// Adapter implementing [`MietteDiagnostic`] for a [`ModelGraphError`].
pub struct ErrorAdapter<'a>(pub &'a ModelGraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ModelGraphError::Io(_) => "modelgraph::io",
            ModelGraphError::Config(_) => "modelgraph::config",
            ModelGraphError::Export(_) => "modelgraph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ModelGraphError::Config(_) => "check the [view] and [style] sections of the configuration file",
            ModelGraphError::Io(_) | ModelGraphError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`ModelGraphError`] into a reportable diagnostic.
pub fn to_reportable(err: &ModelGraphError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
