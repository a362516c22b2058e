//! Error types for Tessella operations.
//!
//! This module provides the main error type [`TessellaError`] which wraps
//! the error conditions that can occur while reading sheets, arranging grids
//! and exporting them.

use std::io;

use thiserror::Error;

use crate::{layout::GridError, sheet::SheetError};

/// The main error type for Tessella operations.
///
/// # Diagnostic Variants
///
/// The `Sheet` variant keeps the sheet source alongside the error so callers
/// can point at the offending span.
#[derive(Debug, Error)]
pub enum TessellaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Sheet { err: SheetError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] GridError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TessellaError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TessellaError {
    /// Create a new `Sheet` error with the associated source text.
    pub fn new_sheet_error(err: SheetError, src: impl Into<String>) -> Self {
        Self::Sheet {
            err,
            src: src.into(),
        }
    }
}
