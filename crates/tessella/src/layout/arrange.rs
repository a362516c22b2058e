//! Chunking normalized diagrams into rows and composing the grid.

use log::debug;
use serde::Deserialize;

use tessella_core::diagram::Composable;

use super::{GridError, auto_columns, pad_list, same_bounding_rect};

/// The order in which cells are laid out along each row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Every row runs left to right.
    #[default]
    RowMajor,
    /// Rows alternate direction: rows 1, 3, 5… run right to left.
    Snake,
}

impl Traversal {
    /// Applies this traversal to a list of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessella::layout::Traversal;
    /// let rows = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    /// assert_eq!(
    ///     Traversal::Snake.apply(rows),
    ///     vec![vec![1, 2], vec![4, 3], vec![5, 6]]
    /// );
    /// ```
    pub fn apply<T>(self, rows: Vec<Vec<T>>) -> Vec<Vec<T>> {
        match self {
            Self::RowMajor => rows,
            Self::Snake => rows
                .into_iter()
                .enumerate()
                .map(|(index, mut row)| {
                    if index % 2 == 1 {
                        row.reverse();
                    }
                    row
                })
                .collect(),
        }
    }
}

/// The bounding box every cell of a grid is normalized to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellShape {
    /// Cells span the widest width and the tallest height.
    #[default]
    Rect,
    /// Cells are squares whose side is the largest dimension of any diagram.
    Square,
}

/// Arranges diagrams into a grid with `columns` cells per row.
///
/// The list is padded with [`Composable::empty`] to whole rows, normalized
/// with [`same_bounding_rect`] so every cell in the grid has the same size,
/// and split into rows in order. `row_transform` then receives the full list
/// of rows and may reorder them or their cells. Finally each row is
/// concatenated left to right and the rows top to bottom.
///
/// # Errors
///
/// Returns [`GridError::ZeroColumns`] when `columns` is zero and
/// [`GridError::EmptyInput`] when `diagrams` is empty.
pub fn grid_arrange<D, F>(row_transform: F, columns: usize, diagrams: Vec<D>) -> Result<D, GridError>
where
    D: Composable,
    F: FnOnce(Vec<Vec<D>>) -> Vec<Vec<D>>,
{
    let item_count = diagrams.len();
    let padded = pad_list(columns, D::empty(), diagrams)?;
    let cells = same_bounding_rect(padded)?;
    let rows = chunk_rows(cells, columns);

    debug!(item_count, columns, rows = rows.len(); "Arranging grid");

    let rows = row_transform(rows);
    Ok(D::vcat(rows.into_iter().map(D::hcat)))
}

/// Arranges diagrams row by row, choosing the column count with
/// [`auto_columns`].
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] when `diagrams` is empty.
pub fn grid_cat<D: Composable>(diagrams: Vec<D>) -> Result<D, GridError> {
    let columns = auto_columns(diagrams.len())?;
    grid_cat_columns(columns, diagrams)
}

/// Arranges diagrams row by row with `columns` cells per row.
///
/// # Errors
///
/// See [`grid_arrange`].
pub fn grid_cat_columns<D: Composable>(columns: usize, diagrams: Vec<D>) -> Result<D, GridError> {
    grid_arrange(|rows| Traversal::RowMajor.apply(rows), columns, diagrams)
}

/// Arranges diagrams in snake order, choosing the column count with
/// [`auto_columns`].
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] when `diagrams` is empty.
pub fn grid_snake<D: Composable>(diagrams: Vec<D>) -> Result<D, GridError> {
    let columns = auto_columns(diagrams.len())?;
    grid_snake_columns(columns, diagrams)
}

/// Arranges diagrams in snake order with `columns` cells per row.
///
/// Row 0 runs left to right, row 1 right to left, and so on, so consecutive
/// diagrams always sit in neighbouring cells.
///
/// # Errors
///
/// See [`grid_arrange`].
pub fn grid_snake_columns<D: Composable>(columns: usize, diagrams: Vec<D>) -> Result<D, GridError> {
    grid_arrange(|rows| Traversal::Snake.apply(rows), columns, diagrams)
}

/// Splits `items` into consecutive rows of `columns` items.
fn chunk_rows<T>(items: Vec<T>, columns: usize) -> Vec<Vec<T>> {
    let mut rows = Vec::with_capacity(items.len().div_ceil(columns));
    let mut items = items.into_iter();

    loop {
        let row: Vec<T> = items.by_ref().take(columns).collect();
        if row.is_empty() {
            break;
        }
        rows.push(row);
    }

    rows
}
