//! A minimal scene type implementing the layout capability traits.
//!
//! A [`Scene`] is a flat list of positioned [`Element`]s. Each element is an
//! axis-aligned box that is either visible (optionally labelled and filled) or
//! a phantom that only occupies space. Composition concatenates element lists
//! after translating them, so a scene never shares state with the scenes it
//! was built from.
//!
//! # Example
//!
//! ```
//! # use tessella_core::{diagram::{Composable, Measurable}, geometry::Size, scene::Scene};
//! let a = Scene::labeled("a", Size::new(10.0, 10.0));
//! let b = Scene::labeled("b", Size::new(20.0, 10.0));
//!
//! let row = Scene::hcat([a, b]);
//! assert_eq!(row.width(), 30.0);
//! assert_eq!(row.visible_elements().count(), 2);
//! ```

use crate::{
    color::Color,
    diagram::{Composable, Measurable},
    geometry::{Bounds, Point, Size},
};

/// A positioned box inside a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    bounds: Bounds,
    label: Option<String>,
    fill: Option<Color>,
    visible: bool,
}

impl Element {
    /// Creates a visible, unlabelled element occupying `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            label: None,
            fill: None,
            visible: true,
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

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Returns `false` for phantom elements.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn translate(mut self, offset: Point) -> Self {
        self.bounds = self.bounds.translate(offset);
        self
    }
}

/// A composable collection of positioned elements.
///
/// Elements are kept in paint order: later elements are drawn over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Creates a scene with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a visible, labelled rectangle centered on the origin.
    pub fn labeled(label: impl Into<String>, size: Size) -> Self {
        Self {
            elements: vec![Element::new(Point::default().to_bounds(size)).with_label(label)],
        }
    }

    /// Sets the fill color of every visible element.
    pub fn with_fill(mut self, fill: Color) -> Self {
        for element in self.elements.iter_mut().filter(|e| e.visible) {
            element.fill = Some(fill);
        }
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterates over the elements that render, in paint order.
    pub fn visible_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.visible)
    }

    /// Iterates over the elements that only occupy space.
    pub fn phantom_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.visible)
    }

    /// Finds the first visible element carrying `label`.
    pub fn find(&self, label: &str) -> Option<&Element> {
        self.visible_elements().find(|e| e.label() == Some(label))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The union of all element bounds, or `None` for an empty scene.
    pub fn envelope(&self) -> Option<Bounds> {
        let (first, rest) = self.elements.split_first()?;
        Some(
            rest.iter()
                .fold(first.bounds, |acc, element| acc.merge(&element.bounds)),
        )
    }

    /// Moves every element by `offset`.
    pub fn translate(self, offset: Point) -> Self {
        Self {
            elements: self
                .elements
                .into_iter()
                .map(|element| element.translate(offset))
                .collect(),
        }
    }

    fn concat<I>(items: I, axis: Axis) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut elements = Vec::new();
        let mut cursor: Option<f32> = None;

        for item in items {
            let Some(bounds) = item.envelope() else {
                continue;
            };

            let (start, end) = match axis {
                Axis::Horizontal => (bounds.min_x(), bounds.max_x()),
                Axis::Vertical => (bounds.min_y(), bounds.max_y()),
            };
            let shift = cursor.map_or(0.0, |edge| edge - start);
            cursor = Some(end + shift);

            let offset = match axis {
                Axis::Horizontal => Point::new(shift, 0.0),
                Axis::Vertical => Point::new(0.0, shift),
            };
            elements.extend(item.translate(offset).elements);
        }

        Self { elements }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Measurable for Scene {
    fn bounds(&self) -> Bounds {
        self.envelope().unwrap_or_default()
    }
}

impl Composable for Scene {
    fn empty() -> Self {
        Self::new()
    }

    fn rect(size: Size) -> Self {
        Self {
            elements: vec![Element::new(Point::default().to_bounds(size))],
        }
    }

    fn phantom(self) -> Self {
        Self {
            elements: self
                .elements
                .into_iter()
                .map(|element| Element {
                    visible: false,
                    ..element
                })
                .collect(),
        }
    }

    fn translate_origin_to(self, point: Point) -> Self {
        self.translate(point)
    }

    fn overlay(back: Self, front: Self) -> Self {
        let mut elements = back.elements;
        elements.extend(front.elements);
        Self { elements }
    }

    fn hcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::concat(items, Axis::Horizontal)
    }

    fn vcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::concat(items, Axis::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn labeled(label: &str, width: f32, height: f32) -> Scene {
        Scene::labeled(label, Size::new(width, height))
    }

    #[test]
    fn test_empty_scene_has_zero_bounds() {
        let scene = Scene::empty();
        assert!(scene.is_empty());
        assert!(scene.envelope().is_none());
        assert_eq!(scene.bounds(), Bounds::default());
        assert_approx_eq!(f32, scene.width(), 0.0);
        assert_approx_eq!(f32, scene.height(), 0.0);
    }

    #[test]
    fn test_rect_is_centered_on_origin() {
        let scene = Scene::rect(Size::new(10.0, 4.0));
        let bounds = scene.bounds();
        assert_approx_eq!(f32, bounds.min_x(), -5.0);
        assert_approx_eq!(f32, bounds.min_y(), -2.0);
        assert_eq!(scene.center(), Point::default());
        assert_eq!(scene.visible_elements().count(), 1);
    }

    #[test]
    fn test_square_has_equal_sides() {
        let scene = Scene::square(7.0);
        assert_approx_eq!(f32, scene.width(), 7.0);
        assert_approx_eq!(f32, scene.height(), 7.0);
    }

    #[test]
    fn test_phantom_keeps_extent_but_hides_elements() {
        let scene = labeled("a", 10.0, 20.0).phantom();
        assert_approx_eq!(f32, scene.width(), 10.0);
        assert_approx_eq!(f32, scene.height(), 20.0);
        assert_eq!(scene.visible_elements().count(), 0);
        assert_eq!(scene.phantom_elements().count(), 1);
        assert!(scene.find("a").is_none());
    }

    #[test]
    fn test_translate_origin_to_moves_center() {
        let scene = Scene::rect(Size::new(4.0, 4.0)).translate_origin_to(Point::new(10.0, -3.0));
        assert_eq!(scene.center(), Point::new(10.0, -3.0));
        assert_approx_eq!(f32, scene.width(), 4.0);
    }

    #[test]
    fn test_overlay_keeps_positions_and_paint_order() {
        let back = Scene::rect(Size::new(20.0, 20.0)).phantom();
        let front = labeled("front", 4.0, 4.0).translate_origin_to(Point::new(3.0, 3.0));

        let combined = Scene::overlay(back, front);

        assert_eq!(combined.elements().len(), 2);
        assert!(!combined.elements()[0].is_visible());
        assert_eq!(combined.elements()[1].label(), Some("front"));
        assert_approx_eq!(f32, combined.width(), 20.0);
        let front_center = combined.find("front").unwrap().bounds().center();
        assert_eq!(front_center, Point::new(3.0, 3.0));
    }

    #[test]
    fn test_hcat_abuts_items() {
        let row = Scene::hcat([
            labeled("a", 10.0, 10.0),
            labeled("b", 20.0, 6.0),
            labeled("c", 4.0, 30.0),
        ]);

        let a = row.find("a").unwrap().bounds();
        let b = row.find("b").unwrap().bounds();
        let c = row.find("c").unwrap().bounds();

        assert_approx_eq!(f32, a.min_x(), -5.0);
        assert_approx_eq!(f32, b.min_x(), a.max_x());
        assert_approx_eq!(f32, c.min_x(), b.max_x());
        assert_approx_eq!(f32, row.width(), 34.0);
        // Vertical positions are untouched.
        assert_approx_eq!(f32, b.center().y(), 0.0);
        assert_approx_eq!(f32, row.height(), 30.0);
    }

    #[test]
    fn test_vcat_stacks_downward() {
        let column = Scene::vcat([labeled("top", 10.0, 10.0), labeled("bottom", 6.0, 20.0)]);

        let top = column.find("top").unwrap().bounds();
        let bottom = column.find("bottom").unwrap().bounds();

        assert_approx_eq!(f32, bottom.min_y(), top.max_y());
        assert!(bottom.center().y() > top.center().y());
        assert_approx_eq!(f32, column.height(), 30.0);
        assert_approx_eq!(f32, column.width(), 10.0);
    }

    #[test]
    fn test_concat_skips_empty_items() {
        let row = Scene::hcat([
            labeled("a", 10.0, 10.0),
            Scene::empty(),
            labeled("b", 10.0, 10.0),
        ]);

        assert_eq!(row.elements().len(), 2);
        assert_approx_eq!(f32, row.width(), 20.0);
        assert!(Scene::vcat(Vec::new()).is_empty());
    }

    #[test]
    fn test_with_fill_only_touches_visible_elements() {
        let fill = Color::new("red").unwrap();
        let scene = Scene::overlay(Scene::square(5.0).phantom(), labeled("a", 2.0, 2.0))
            .with_fill(fill);

        assert_eq!(scene.elements()[0].fill(), None);
        assert_eq!(scene.find("a").unwrap().fill(), Some(fill));
    }
}
