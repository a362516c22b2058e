//! Row padding for grid layout.

use std::iter;

use log::trace;

use super::GridError;

/// Extends `items` with copies of `filler` until its length is a multiple of
/// `columns`.
///
/// Appends `(-len) mod columns` fillers, so a list that already fills whole
/// rows is returned unchanged.
///
/// # Errors
///
/// Returns [`GridError::ZeroColumns`] when `columns` is zero.
///
/// # Examples
///
/// ```
/// # use tessella::layout::pad_list;
/// let padded = pad_list(3, 0, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(padded, vec![1, 2, 3, 4, 0, 0]);
/// ```
pub fn pad_list<T: Clone>(columns: usize, filler: T, mut items: Vec<T>) -> Result<Vec<T>, GridError> {
    if columns == 0 {
        return Err(GridError::ZeroColumns);
    }

    let missing = (columns - items.len() % columns) % columns;
    trace!(item_count = items.len(), columns, missing; "Padding list to full rows");

    items.extend(iter::repeat_n(filler, missing));
    Ok(items)
}
