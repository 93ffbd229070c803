//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Penstock for placing and measuring diagram elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Origin`] - Which corner (or edge midpoint) of a box an anchor point refers to
//!
//! # Coordinate System
//!
//! Penstock uses a coordinate system consistent with SVG: the origin is the
//! top-left corner at `(0, 0)`, x increases rightward and y increases
//! downward.

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has its origin at the
/// top-left with y increasing downward (see [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use penstock_core::geometry::Point;
/// let anchor = Point::new(10.0, 177.0);
/// let offset = Point::new(7.0, 14.0);
///
/// let inset = anchor.add_point(offset);
/// assert_eq!(inset.x(), 17.0);
/// assert_eq!(inset.y(), 191.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor.
    ///
    /// Used to convert declared canvas sizes between units, e.g. from
    /// millimetres to device pixels.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Describes which reference point of a box an anchor coordinate names.
///
/// Boxes are always placed from their left edge; the variants select whether
/// the anchor y-coordinate is the top edge, the bottom edge, or the vertical
/// center of the box.
///
/// # Examples
///
/// ```
/// # use penstock_core::geometry::{Origin, Point, Size};
/// let anchor = Point::new(10.0, 100.0);
/// let size = Size::new(40.0, 20.0);
///
/// assert_eq!(Origin::TopLeft.resolve(anchor, size).y(), 100.0);
/// assert_eq!(Origin::CenterLeft.resolve(anchor, size).y(), 90.0);
/// assert_eq!(Origin::BottomLeft.resolve(anchor, size).y(), 80.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The anchor names the midpoint of the left edge
    CenterLeft,
    /// The anchor names the top-left corner
    TopLeft,
    /// The anchor names the bottom-left corner
    BottomLeft,
}

impl Origin {
    /// Resolves an anchor point to the top-left corner of a box of the given
    /// size.
    ///
    /// The x-coordinate is never adjusted; only the y-coordinate shifts
    /// according to the origin variant.
    pub fn resolve(self, anchor: Point, size: Size) -> Point {
        match self {
            Origin::CenterLeft => anchor.with_y(anchor.y() - size.height() / 2.0),
            Origin::TopLeft => anchor,
            Origin::BottomLeft => anchor.with_y(anchor.y() - size.height()),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width(),
            max_y: top_left.y + size.height(),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use penstock_core::geometry::{Bounds, Point, Size};
    /// let upper = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let lower = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let stack = upper.merge(&lower);
    /// assert_eq!(stack.min_y(), 0.0);
    /// assert_eq!(stack.width(), 130.0);
    /// assert_eq!(stack.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by a uniform margin on all four sides
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..500.0, 1.0f32..500.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (point_strategy(), size_strategy())
            .prop_map(|(top_left, size)| Bounds::new_from_top_left(top_left, size))
    }

    fn origin_strategy() -> impl Strategy<Value = Origin> {
        prop_oneof![
            Just(Origin::CenterLeft),
            Just(Origin::TopLeft),
            Just(Origin::BottomLeft),
        ]
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Resolving an anchor must never move the x-coordinate.
    fn check_resolve_keeps_x(origin: Origin, anchor: Point, size: Size) -> Result<(), TestCaseError> {
        let resolved = origin.resolve(anchor, size);
        prop_assert_eq!(resolved.x(), anchor.x());
        Ok(())
    }

    /// The three origins order the resolved y-coordinate as
    /// bottom-left <= center-left <= top-left.
    fn check_resolve_y_ordering(anchor: Point, size: Size) -> Result<(), TestCaseError> {
        let top = Origin::TopLeft.resolve(anchor, size).y();
        let center = Origin::CenterLeft.resolve(anchor, size).y();
        let bottom = Origin::BottomLeft.resolve(anchor, size).y();

        prop_assert!(bottom <= center);
        prop_assert!(center <= top);
        Ok(())
    }

    /// Bounds merge should be commutative: a.merge(b) == b.merge(a).
    fn check_bounds_merge_is_commutative(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged1 = b1.merge(&b2);
        let merged2 = b2.merge(&b1);

        prop_assert!(approx_eq!(f32, merged1.min_x(), merged2.min_x()));
        prop_assert!(approx_eq!(f32, merged1.min_y(), merged2.min_y()));
        prop_assert!(approx_eq!(f32, merged1.max_x(), merged2.max_x()));
        prop_assert!(approx_eq!(f32, merged1.max_y(), merged2.max_y()));
        Ok(())
    }

    /// Merged bounds should contain both original bounds.
    fn check_bounds_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);

        for bounds in [b1, b2] {
            prop_assert!(merged.min_x() <= bounds.min_x() + 0.001);
            prop_assert!(merged.min_y() <= bounds.min_y() + 0.001);
            prop_assert!(merged.max_x() >= bounds.max_x() - 0.001);
            prop_assert!(merged.max_y() >= bounds.max_y() - 0.001);
        }
        Ok(())
    }

    /// Expanding bounds grows each dimension by twice the margin.
    fn check_expand_grows_both_dimensions(
        bounds: Bounds,
        margin: f32,
    ) -> Result<(), TestCaseError> {
        let expanded = bounds.expand(margin);

        prop_assert!(approx_eq!(
            f32,
            expanded.width(),
            bounds.width() + 2.0 * margin,
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            expanded.height(),
            bounds.height() + 2.0 * margin,
            epsilon = 0.001
        ));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn resolve_keeps_x(origin in origin_strategy(), anchor in point_strategy(), size in size_strategy()) {
            check_resolve_keeps_x(origin, anchor, size)?;
        }

        #[test]
        fn resolve_y_ordering(anchor in point_strategy(), size in size_strategy()) {
            check_resolve_y_ordering(anchor, size)?;
        }

        #[test]
        fn bounds_merge_is_commutative(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_is_commutative(b1, b2)?;
        }

        #[test]
        fn bounds_merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_bounds_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn expand_grows_both_dimensions(bounds in bounds_strategy(), margin in 0.0f32..100.0) {
            check_expand_grows_both_dimensions(bounds, margin)?;
        }
    }
}
