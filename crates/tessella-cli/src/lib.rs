//! CLI logic for the Tessella grid tool.
//!
//! This module reads a sheet, arranges its boxes with the configured grid
//! layout and writes the SVG preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, CellArg, TraversalArg};

use std::fs;

use log::info;

use tessella::{GridBuilder, TessellaError};

/// Run the Tessella CLI application
///
/// # Errors
///
/// Returns `TessellaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Sheet errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TessellaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing sheet"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args);

    let source = fs::read_to_string(&args.input)?;

    let builder = GridBuilder::new(app_config);
    let sheet = builder.parse(&source)?;
    let svg = builder.render_svg(&sheet)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
