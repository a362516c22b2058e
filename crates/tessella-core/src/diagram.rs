//! Capability traits for values the grid layout can measure and combine.
//!
//! The grid algorithms never inspect what a diagram draws. They only need to
//! know its extent ([`Measurable`]) and to build new diagrams out of existing
//! ones ([`Composable`]). Any scene type from a host application can take part
//! in grid layout by implementing these two traits;
//! [`Scene`](crate::scene::Scene) is the implementation shipped with this crate.

use crate::geometry::{Bounds, Point, Size};

/// A value with a measurable axis-aligned extent.
///
/// Only [`Measurable::bounds`] is required; the remaining methods derive from it.
pub trait Measurable {
    /// The smallest axis-aligned box enclosing the value, in its own
    /// coordinate frame. A value that occupies no space reports zero-sized
    /// bounds at the origin.
    fn bounds(&self) -> Bounds;

    fn size(&self) -> Size {
        self.bounds().to_size()
    }

    fn width(&self) -> f32 {
        self.bounds().width()
    }

    fn height(&self) -> f32 {
        self.bounds().height()
    }

    /// The geometric center of [`Measurable::bounds`].
    fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// A measurable value that can be built from placeholders and combined with
/// other values of the same type.
///
/// Every operation returns a new value; implementors must not share mutable
/// state between a value and the values derived from it.
pub trait Composable: Measurable + Clone + Sized {
    /// A value with zero width and height that renders nothing.
    fn empty() -> Self;

    /// An axis-aligned rectangle of the given size, centered on the local origin.
    fn rect(size: Size) -> Self;

    /// An axis-aligned square centered on the local origin.
    fn square(side: f32) -> Self {
        Self::rect(Size::square(side))
    }

    /// Marks the value as occupying layout space while rendering nothing.
    fn phantom(self) -> Self;

    /// Moves the value so that its local origin lands on `point`.
    ///
    /// A fresh [`Composable::rect`] is centered on its origin, so this places
    /// the rectangle's center on `point`.
    fn translate_origin_to(self, point: Point) -> Self;

    /// Combines two values, `front` drawn over `back`. Neither value moves.
    fn overlay(back: Self, front: Self) -> Self;

    /// Places values left to right so each one's left edge touches the
    /// previous one's right edge. The first value keeps its position and
    /// vertical positions are left unchanged. Values that occupy no space
    /// contribute nothing.
    fn hcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>;

    /// Places values top to bottom so each one's top edge touches the
    /// previous one's bottom edge. The first value keeps its position and
    /// horizontal positions are left unchanged. Values that occupy no space
    /// contribute nothing.
    fn vcat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}
