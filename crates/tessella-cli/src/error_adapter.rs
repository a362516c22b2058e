//! Error adapter for converting TessellaError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Sheet errors point
//! at the offending span of the sheet source; every other variant is reported
//! with a diagnostic code and, where one exists, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use tessella::{GridError, TessellaError, sheet::SheetError};

/// Adapter for a sheet error together with the source it came from.
pub struct SheetDiagnostic<'a> {
    err: &'a SheetError,
    src: &'a str,
}

impl<'a> SheetDiagnostic<'a> {
    pub fn new(err: &'a SheetError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for SheetDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SheetDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for SheetDiagnostic<'_> {}

impl MietteDiagnostic for SheetDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("tessella::sheet"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.err
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span_to_miette(span, self.src),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-sheet [`TessellaError`] variants.
pub struct ErrorAdapter<'a>(pub &'a TessellaError);

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
            TessellaError::Io(_) => "tessella::io",
            TessellaError::Sheet { .. } => "tessella::sheet",
            TessellaError::Layout(_) => "tessella::layout",
            TessellaError::Export(_) => "tessella::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TessellaError::Layout(GridError::EmptyInput) => {
                "add at least one [[item]] table to the sheet"
            }
            TessellaError::Layout(GridError::ZeroColumns) => {
                "use a column count of at least 1, or omit it to pick one automatically"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A sheet error with source location information.
    Sheet(SheetDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Sheet(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Sheet(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Sheet(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Sheet(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Sheet(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Sheet(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a byte range to a miette [`SourceSpan`], clamped to the source.
fn span_to_miette(span: std::ops::Range<usize>, src: &str) -> SourceSpan {
    let start = span.start.min(src.len());
    let end = span.end.clamp(start, src.len());
    SourceSpan::new(start.into(), end - start)
}

/// Convert a [`TessellaError`] into a list of reportable errors.
pub fn to_reportables(err: &TessellaError) -> Vec<Reportable<'_>> {
    match err {
        TessellaError::Sheet { err: sheet_err, src } => {
            vec![Reportable::Sheet(SheetDiagnostic::new(sheet_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
