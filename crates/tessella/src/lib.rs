//! Tessella - grid layout for pre-rendered diagrams.
//!
//! Tessella arranges a list of diagrams into a rectangular grid: it gives
//! every diagram the same invisible bounding box, pads the last row, chunks
//! the list into rows and concatenates them. The [`layout`] module holds the
//! algorithms, generic over any type implementing
//! [`Composable`](diagram::Composable). [`GridBuilder`] wires them to
//! configuration, TOML sheets and SVG export.

pub mod config;
pub mod export;
pub mod layout;
pub mod sheet;

mod error;

pub use tessella_core::{color, diagram, geometry, scene};

pub use error::TessellaError;
pub use layout::{
    GridError, grid_cat, grid_cat_columns, grid_snake, grid_snake_columns, grid_with,
    same_bounding_rect, same_bounding_square,
};

use log::{debug, info, trace};

use config::AppConfig;
use diagram::Composable;
use export::Exporter;
use layout::{CellShape, auto_columns, grid_arrange};
use sheet::Sheet;

/// Builder for arranging diagrams according to an [`AppConfig`].
///
/// # Examples
///
/// ```
/// use tessella::{GridBuilder, config::AppConfig};
///
/// let source = r#"
///     [[item]]
///     label = "a"
///     width = 10
///     height = 10
/// "#;
///
/// let builder = GridBuilder::new(AppConfig::default());
/// let sheet = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&sheet).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct GridBuilder {
    config: AppConfig,
}

impl GridBuilder {
    /// Create a new grid builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse sheet source text.
    ///
    /// # Errors
    ///
    /// Returns [`TessellaError::Sheet`] carrying the source text when the
    /// sheet is malformed.
    pub fn parse(&self, source: &str) -> Result<Sheet, TessellaError> {
        info!("Parsing sheet");

        let sheet =
            Sheet::parse(source).map_err(|err| TessellaError::new_sheet_error(err, source))?;

        debug!(item_count = sheet.items().len(); "Sheet parsed successfully");
        trace!(sheet:?; "Parsed sheet");

        Ok(sheet)
    }

    /// Arrange diagrams with the configured columns, traversal and cell shape.
    ///
    /// # Errors
    ///
    /// Returns [`TessellaError::Layout`] for an empty list or a zero column count.
    pub fn arrange<D: Composable>(&self, diagrams: Vec<D>) -> Result<D, TessellaError> {
        self.arrange_with_columns(self.config.layout().columns(), diagrams)
    }

    fn arrange_with_columns<D: Composable>(
        &self,
        columns: Option<usize>,
        diagrams: Vec<D>,
    ) -> Result<D, TessellaError> {
        let layout = self.config.layout();

        let diagrams = match layout.cell() {
            CellShape::Rect => diagrams,
            CellShape::Square => same_bounding_square(diagrams)?,
        };
        let columns = match columns {
            Some(columns) => columns,
            None => auto_columns(diagrams.len())?,
        };

        info!(
            item_count = diagrams.len(),
            columns,
            traversal:? = layout.traversal(),
            cell:? = layout.cell();
            "Arranging grid"
        );

        let traversal = layout.traversal();
        Ok(grid_arrange(|rows| traversal.apply(rows), columns, diagrams)?)
    }

    /// Arrange the items of a sheet and render the result to an SVG string.
    ///
    /// A column count given by the sheet takes precedence over the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`TessellaError`] for layout or rendering errors.
    pub fn render_svg(&self, sheet: &Sheet) -> Result<String, TessellaError> {
        let columns = sheet.columns().or(self.config.layout().columns());
        let grid = self.arrange_with_columns(columns, sheet.to_scenes())?;
        debug!("Grid arranged");

        let exporter = export::svg::Svg::from_style(self.config.style())?;
        let mut buffer = Vec::new();
        exporter.export_scene(&grid, &mut buffer)?;

        let svg = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
