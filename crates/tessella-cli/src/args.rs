//! Command-line argument definitions for the Tessella CLI.
//!
//! [`Args`] is parsed with [`clap`]. Besides input/output paths, logging and
//! the configuration file, a few layout settings can be overridden per run
//! without editing the configuration.

use clap::{Parser, ValueEnum};

use tessella::layout::{CellShape, Traversal};

/// Arrange the boxes of a sheet into a grid and write an SVG preview
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input sheet (TOML)
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Cells per row, overriding the configuration
    #[arg(long)]
    pub columns: Option<usize>,

    /// Row traversal order, overriding the configuration
    #[arg(long, value_enum)]
    pub traversal: Option<TraversalArg>,

    /// Cell shape, overriding the configuration
    #[arg(long, value_enum)]
    pub cell: Option<CellArg>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Creates arguments for `input` and `output` with every other option at its default.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config: None,
            columns: None,
            traversal: None,
            cell: None,
            log_level: "off".to_string(),
        }
    }
}

/// Command-line spelling of [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalArg {
    RowMajor,
    Snake,
}

impl From<TraversalArg> for Traversal {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::RowMajor => Self::RowMajor,
            TraversalArg::Snake => Self::Snake,
        }
    }
}

/// Command-line spelling of [`CellShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CellArg {
    Rect,
    Square,
}

impl From<CellArg> for CellShape {
    fn from(arg: CellArg) -> Self {
        match arg {
            CellArg::Rect => Self::Rect,
            CellArg::Square => Self::Square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["tessella", "sheet.toml"]).unwrap();
        assert_eq!(args.input, "sheet.toml");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_level, "info");
        assert!(args.columns.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "tessella",
            "sheet.toml",
            "-o",
            "grid.svg",
            "--columns",
            "4",
            "--traversal",
            "snake",
            "--cell",
            "square",
        ])
        .unwrap();

        assert_eq!(args.output, "grid.svg");
        assert_eq!(args.columns, Some(4));
        assert_eq!(args.traversal, Some(TraversalArg::Snake));
        assert_eq!(Traversal::from(TraversalArg::RowMajor), Traversal::RowMajor);
        assert_eq!(args.cell.map(CellShape::from), Some(CellShape::Square));
    }

    #[test]
    fn test_traversal_value_names() {
        assert!(Args::try_parse_from(["tessella", "s.toml", "--traversal", "row-major"]).is_ok());
        assert!(Args::try_parse_from(["tessella", "s.toml", "--traversal", "zigzag"]).is_err());
    }
}
