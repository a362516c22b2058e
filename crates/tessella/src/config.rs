//! Configuration types for Tessella grid layout and export.
//!
//! All types implement [`serde::Deserialize`] and default every missing
//! field, so a configuration file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Column count, traversal order and cell shape.
//! - [`StyleConfig`] - SVG preview options such as background color and margin.
//!
//! # Example
//!
//! ```
//! # use tessella::config::AppConfig;
//! # use tessella::layout::Traversal;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     traversal = "snake"
//!     columns = 4
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout().traversal(), Traversal::Snake);
//! assert_eq!(config.layout().columns(), Some(4));
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use tessella_core::color::Color;

use crate::layout::{CellShape, Traversal};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Controls how diagrams are arranged into a grid.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Row traversal order.
    #[serde(default)]
    traversal: Traversal,

    /// Cells per row. `None` derives the count from the number of diagrams.
    #[serde(default)]
    columns: Option<usize>,

    /// Shape every cell is normalized to.
    #[serde(default)]
    cell: CellShape,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `traversal` - Row traversal order.
    /// * `columns` - Cells per row, or `None` to derive it.
    /// * `cell` - Shape every cell is normalized to.
    pub fn new(traversal: Traversal, columns: Option<usize>, cell: CellShape) -> Self {
        Self {
            traversal,
            columns,
            cell,
        }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn columns(&self) -> Option<usize> {
        self.columns
    }

    pub fn cell(&self) -> CellShape {
        self.cell
    }
}

/// Visual options for the SVG preview.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Background color for the whole document, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Space left around the grid, in scene units.
    #[serde(default = "default_margin")]
    margin: f32,

    /// Outline the phantom cell frames.
    #[serde(default)]
    show_phantoms: bool,
}

fn default_margin() -> f32 {
    20.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            margin: default_margin(),
            show_phantoms: false,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn show_phantoms(&self) -> bool {
        self.show_phantoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.layout().traversal(), Traversal::RowMajor);
        assert_eq!(config.layout().columns(), None);
        assert_eq!(config.layout().cell(), CellShape::Rect);
        assert_eq!(config.style().margin(), 20.0);
        assert!(!config.style().show_phantoms());
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.style().margin(), 20.0);
        assert_eq!(config.layout().traversal(), Traversal::RowMajor);
    }

    #[test]
    fn test_full_document() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            traversal = "snake"
            columns = 5
            cell = "square"

            [style]
            background_color = "#fafafa"
            margin = 8.5
            show_phantoms = true
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().traversal(), Traversal::Snake);
        assert_eq!(config.layout().columns(), Some(5));
        assert_eq!(config.layout().cell(), CellShape::Square);
        assert_eq!(config.style().margin(), 8.5);
        assert!(config.style().show_phantoms());
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "nope"
            "#,
        )
        .unwrap();

        let err = config.style().background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [layout]
            traversel = "snake"
            "#,
        );
        assert!(result.is_err());
    }
}
