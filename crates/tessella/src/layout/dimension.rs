//! Column count selection and generated grids.

use log::debug;

use tessella_core::diagram::Composable;

use super::{GridError, grid_cat_columns};

/// Chooses a column count for `item_count` diagrams: the square root of the
/// count, rounded to the nearest integer.
///
/// Rounding uses [`f64::round`] (halves away from zero). The square root of
/// an integer is never exactly halfway between two integers, so the choice of
/// rounding convention never changes the result.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] when `item_count` is zero.
///
/// # Examples
///
/// ```
/// # use tessella::layout::auto_columns;
/// assert_eq!(auto_columns(10).unwrap(), 3);
/// assert_eq!(auto_columns(13).unwrap(), 4);
/// ```
pub fn auto_columns(item_count: usize) -> Result<usize, GridError> {
    if item_count == 0 {
        return Err(GridError::EmptyInput);
    }

    let columns = (item_count as f64).sqrt().round() as usize;
    debug!(item_count, columns; "Derived column count");
    Ok(columns)
}

/// Builds a `columns × rows` grid by calling `generator(x, y)` for every cell.
///
/// Cells are generated row by row (`x` varies fastest), which is the order
/// [`grid_cat_columns`] reads them back in, so `generator(x, y)` ends up in
/// column `x` of row `y`.
///
/// # Errors
///
/// Returns [`GridError::ZeroColumns`] when `columns` is zero and
/// [`GridError::EmptyInput`] when `rows` is zero.
///
/// # Examples
///
/// ```
/// # use tessella::layout::grid_with;
/// # use tessella_core::{diagram::{Composable, Measurable}, geometry::Size, scene::Scene};
/// let grid = grid_with(
///     |x, y| Scene::rect(Size::new(1.0 + x as f32, 1.0 + y as f32)),
///     4,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(grid.width(), 16.0);
/// assert_eq!(grid.height(), 4.0);
/// ```
pub fn grid_with<D, F>(mut generator: F, columns: usize, rows: usize) -> Result<D, GridError>
where
    D: Composable,
    F: FnMut(usize, usize) -> D,
{
    if columns == 0 {
        return Err(GridError::ZeroColumns);
    }

    let mut diagrams = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        for x in 0..columns {
            diagrams.push(generator(x, y));
        }
    }

    grid_cat_columns(columns, diagrams)
}
