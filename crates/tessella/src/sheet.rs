//! Sheets: TOML lists of boxes to arrange.
//!
//! A sheet describes the diagrams the CLI lays out. Each `[[item]]` table is
//! one box:
//!
//! ```toml
//! columns = 3            # optional, overrides the configured column count
//!
//! [[item]]
//! label = "parser"       # optional
//! width = 120
//! height = 40
//! fill = "lightsteelblue" # optional CSS color
//! ```
//!
//! Errors carry the byte span of the offending value so callers can point
//! at it in the source.

use std::ops::Range;

use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

use tessella_core::{color::Color, diagram::Composable, geometry::Size, scene::Scene};

/// A sheet that failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SheetError {
    message: String,
    span: Option<Range<usize>>,
    help: Option<String>,
}

impl SheetError {
    pub fn new(message: impl Into<String>, span: Option<Range<usize>>) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending text in the sheet source, when known.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSheet {
    #[serde(default)]
    columns: Option<Spanned<usize>>,
    #[serde(default, rename = "item")]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    #[serde(default)]
    label: Option<String>,
    width: Spanned<f32>,
    height: Spanned<f32>,
    #[serde(default)]
    fill: Option<Spanned<String>>,
}

/// One box of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    label: Option<String>,
    size: Size,
    fill: Option<Color>,
}

impl Item {
    pub fn new(size: Size) -> Self {
        Self {
            label: None,
            size,
            fill: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Builds a scene holding this item as a rectangle centered on the origin.
    pub fn to_scene(&self) -> Scene {
        let scene = match &self.label {
            Some(label) => Scene::labeled(label.clone(), self.size),
            None => Scene::rect(self.size),
        };
        match self.fill {
            Some(fill) => scene.with_fill(fill),
            None => scene,
        }
    }

    fn from_raw(raw: RawItem) -> Result<Self, SheetError> {
        let size = Size::new(
            positive_dimension("width", raw.width)?,
            positive_dimension("height", raw.height)?,
        );

        let fill = raw
            .fill
            .map(|fill| {
                let span = fill.span();
                Color::new(fill.get_ref()).map_err(|err| {
                    SheetError::new(err, Some(span))
                        .with_help("use a CSS color such as `teal`, `#336699` or `rgb(51, 102, 153)`")
                })
            })
            .transpose()?;

        Ok(Self {
            label: raw.label,
            size,
            fill,
        })
    }
}

fn positive_dimension(name: &str, value: Spanned<f32>) -> Result<f32, SheetError> {
    let span = value.span();
    let value = value.into_inner();
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SheetError::new(
            format!("item {name} must be a positive number, found {value}"),
            Some(span),
        ))
    }
}

/// A parsed and validated sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    columns: Option<usize>,
    items: Vec<Item>,
}

impl Sheet {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            columns: None,
            items,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Parses and validates a sheet from TOML source.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] for malformed TOML, unknown keys, missing or
    /// non-positive sizes, a zero column count and unparsable colors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessella::sheet::Sheet;
    /// let sheet = Sheet::parse(
    ///     r#"
    ///     [[item]]
    ///     label = "a"
    ///     width = 10
    ///     height = 5
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(sheet.items().len(), 1);
    /// assert_eq!(sheet.items()[0].label(), Some("a"));
    /// ```
    pub fn parse(source: &str) -> Result<Self, SheetError> {
        let raw: RawSheet =
            toml::from_str(source).map_err(|err| SheetError::new(err.message(), err.span()))?;

        let columns = match raw.columns {
            Some(columns) if *columns.get_ref() == 0 => {
                return Err(SheetError::new(
                    "column count must be at least 1",
                    Some(columns.span()),
                )
                .with_help("remove `columns` to derive the count from the number of items"));
            }
            Some(columns) => Some(columns.into_inner()),
            None => None,
        };

        let items = raw
            .items
            .into_iter()
            .map(Item::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { columns, items })
    }

    /// Column count requested by the sheet itself, if any.
    pub fn columns(&self) -> Option<usize> {
        self.columns
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Builds one scene per item, in sheet order.
    pub fn to_scenes(&self) -> Vec<Scene> {
        self.items.iter().map(Item::to_scene).collect()
    }
}
