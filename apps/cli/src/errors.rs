use std::path::PathBuf;

use thiserror::Error;

/// Pipeline-level error type.
///
/// The run either produces a complete PDF or fails with one of these — there is
/// no partial output to clean up.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
