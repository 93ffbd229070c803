//! Error types for Penstock operations.
//!
//! This module provides the main error type [`PenstockError`] which wraps
//! the error conditions that can occur while rendering a pipeline diagram.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::document::DocumentError;
use crate::layout::LayoutError;

/// The main error type for Penstock operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text alongside the failure, so
/// front ends can point at the offending location in the document.
#[derive(Debug, Error)]
pub enum PenstockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: DocumentError, src: String },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl PenstockError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: DocumentError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
