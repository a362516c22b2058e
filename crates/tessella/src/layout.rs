//! Grid layout of composable diagrams.
//!
//! The layout pipeline runs in four stages, each usable on its own:
//!
//! ```text
//! diagrams
//!     ↓ dimension   (pick a column count when none is given)
//!     ↓ padding     (fill the last row with empty diagrams)
//!     ↓ bounding    (give every diagram the same invisible bounding box)
//!     ↓ arrange     (chunk into rows, hcat each row, vcat the rows)
//! composite diagram
//! ```
//!
//! Every function is generic over [`Composable`](tessella_core::diagram::Composable)
//! and is a pure transformation of its inputs.
//!
//! # Example
//!
//! ```
//! use tessella::layout::grid_snake_columns;
//! use tessella_core::{diagram::Measurable, geometry::Size, scene::Scene};
//!
//! let items: Vec<Scene> = ["a", "b", "c", "d"]
//!     .into_iter()
//!     .map(|label| Scene::labeled(label, Size::new(10.0, 10.0)))
//!     .collect();
//!
//! let grid = grid_snake_columns(2, items).unwrap();
//! assert_eq!(grid.width(), 20.0);
//! assert_eq!(grid.height(), 20.0);
//! ```

mod arrange;
mod bounding;
mod dimension;
mod padding;

pub use arrange::{
    CellShape, Traversal, grid_arrange, grid_cat, grid_cat_columns, grid_snake,
    grid_snake_columns,
};
pub use bounding::{same_bounding_rect, same_bounding_square};
pub use dimension::{auto_columns, grid_with};
pub use padding::pad_list;

use thiserror::Error;

/// Precondition violations reported by the grid layout functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A bounding box was requested for an empty list of diagrams.
    #[error("cannot lay out an empty list of diagrams")]
    EmptyInput,

    /// A column count of zero was supplied.
    #[error("column count must be at least 1")]
    ZeroColumns,
}
