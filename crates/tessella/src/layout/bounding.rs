//! Bounding box normalization.
//!
//! Both functions give every diagram in a list the same invisible bounding
//! box by overlaying a phantom placeholder beneath it. The visible content of
//! each diagram is never moved or altered.

use log::debug;

use tessella_core::{
    diagram::Composable,
    geometry::{Point, Size},
};

use super::GridError;

/// Pads every diagram with a phantom square as large as the largest
/// dimension found in the list.
///
/// The square is centered on each diagram's own center, so every output has
/// width and height equal to `max(max width, max height)`.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] when `diagrams` is empty.
pub fn same_bounding_square<D: Composable>(diagrams: Vec<D>) -> Result<Vec<D>, GridError> {
    let side = diagrams
        .iter()
        .map(|diagram| diagram.size().max_side())
        .max_by(f32::total_cmp)
        .ok_or(GridError::EmptyInput)?;

    debug!(item_count = diagrams.len(), side; "Normalizing to a shared bounding square");

    let placeholder = D::square(side).phantom();
    Ok(diagrams
        .into_iter()
        .map(|diagram| {
            let frame = placeholder.clone().translate_origin_to(diagram.center());
            D::overlay(frame, diagram)
        })
        .collect())
}

/// Pads every diagram with a phantom rectangle spanning the widest width and
/// the tallest height found in the list.
///
/// The rectangle is placed at the same point for every diagram: its x center
/// comes from the widest diagram and its y center from the tallest one. This
/// puts all outputs in one shared frame, which keeps cells aligned once they
/// are concatenated into rows and columns. When several diagrams tie for the
/// widest (or tallest), the last of them is used.
///
/// # Errors
///
/// Returns [`GridError::EmptyInput`] when `diagrams` is empty.
///
/// # Examples
///
/// ```
/// # use tessella::layout::same_bounding_rect;
/// # use tessella_core::{diagram::{Composable, Measurable}, geometry::Size, scene::Scene};
/// let cells = same_bounding_rect(vec![
///     Scene::rect(Size::new(10.0, 5.0)),
///     Scene::rect(Size::new(4.0, 20.0)),
/// ])
/// .unwrap();
///
/// for cell in &cells {
///     assert_eq!(cell.width(), 10.0);
///     assert_eq!(cell.height(), 20.0);
/// }
/// ```
pub fn same_bounding_rect<D: Composable>(diagrams: Vec<D>) -> Result<Vec<D>, GridError> {
    let widest = diagrams
        .iter()
        .max_by(|a, b| a.width().total_cmp(&b.width()))
        .ok_or(GridError::EmptyInput)?;
    let tallest = diagrams
        .iter()
        .max_by(|a, b| a.height().total_cmp(&b.height()))
        .ok_or(GridError::EmptyInput)?;

    let size = Size::new(widest.width(), tallest.height());
    let center = Point::new(widest.center().x(), tallest.center().y());

    debug!(
        item_count = diagrams.len(),
        cell_width = size.width(),
        cell_height = size.height();
        "Normalizing to a shared bounding rectangle"
    );

    let placeholder = D::rect(size).phantom().translate_origin_to(center);
    Ok(diagrams
        .into_iter()
        .map(|diagram| D::overlay(placeholder.clone(), diagram))
        .collect())
}
