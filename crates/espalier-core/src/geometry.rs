//! Screen-space geometric types
//!
//! This module provides the geometric primitives the connector layout engine
//! works with. Measured node rectangles arrive from an external renderer as
//! top-left anchored boxes in the rendering container's coordinate space;
//! [`Bounds`] stores them as min/max coordinates and exposes the anchor
//! points connectors attach to.

use serde::{Deserialize, Serialize};

/// Represents a location in the shared rendering coordinate space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
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

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Represents the dimensions of a measured element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
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
}

/// A measured rectangle with minimum and maximum coordinates
///
/// External measurement passes report each rendered node as a top-left
/// position plus a size; [`Bounds::new_from_top_left`] converts that shape
/// into min/max form once, so connector arithmetic never re-derives edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size
    ///
    /// This matches the `{x, y, width, height}` shape measurement
    /// collaborators supply for each rendered node.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (top edge) of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (bottom edge) of the bounds
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

    /// Returns the horizontal center of the bounds
    pub fn center_x(self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Returns the point where a connector leaves this box downward
    ///
    /// The anchor sits at the horizontal center of the bottom edge.
    pub fn bottom_anchor(self) -> Point {
        Point {
            x: self.center_x(),
            y: self.max_y,
        }
    }

    /// Returns the point where a connector enters this box from above
    ///
    /// The anchor sits at the horizontal center of the top edge.
    pub fn top_anchor(self) -> Point {
        Point {
            x: self.center_x(),
            y: self.min_y,
        }
    }

    /// Moves the bounds by the specified offset
    ///
    /// This translates both the minimum and maximum coordinates by the given amount.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Moves the bounds in the opposite direction of the specified offset
    ///
    /// Measurement collaborators report absolute positions; subtracting the
    /// container origin with this method brings a box into the container's
    /// local coordinate space.
    pub fn inverse_translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x - offset.x,
            min_y: self.min_y - offset.y,
            max_x: self.max_x - offset.x,
            max_y: self.max_y - offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_origin() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_is_zero() {
        assert!(Point::new(0.0, 0.0).is_zero());
        assert!(!Point::new(1.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_add() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let result = p1.add_point(p2);
        assert_eq!(result.x(), 4.0);
        assert_eq!(result.y(), 6.0);
    }

    #[test]
    fn test_point_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        let result = p1.sub_point(p2);
        assert_eq!(result.x(), 3.0);
        assert_eq!(result.y(), 5.0);
    }

    #[test]
    fn test_size_new() {
        let size = Size::new(100.0, 200.0);
        assert_eq!(size.width(), 100.0);
        assert_eq!(size.height(), 200.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(100.0, 0.0), Size::new(200.0, 50.0));

        assert_eq!(bounds.min_x(), 100.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_x(), 300.0);
        assert_eq!(bounds.max_y(), 50.0);
        assert_eq!(bounds.width(), 200.0);
        assert_eq!(bounds.height(), 50.0);
    }

    #[test]
    fn test_bounds_center_x() {
        let bounds = Bounds::new_from_top_left(Point::new(100.0, 0.0), Size::new(200.0, 50.0));
        assert_eq!(bounds.center_x(), 200.0);
    }

    #[test]
    fn test_bounds_anchors() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 100.0), Size::new(150.0, 50.0));

        let bottom = bounds.bottom_anchor();
        assert_eq!(bottom.x(), 125.0);
        assert_eq!(bottom.y(), 150.0);

        let top = bounds.top_anchor();
        assert_eq!(top.x(), 125.0);
        assert_eq!(top.y(), 100.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));

        let offset = Point::new(3.0, -1.0);
        let translated = bounds.translate(offset);

        assert_eq!(translated.min_x(), 4.0);
        assert_eq!(translated.min_y(), 1.0);
        assert_eq!(translated.max_x(), 8.0);
        assert_eq!(translated.max_y(), 5.0);
    }

    #[test]
    fn test_bounds_inverse_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(5.0, 3.0), Size::new(4.0, 4.0));

        let origin = Point::new(2.0, 1.0);
        let local = bounds.inverse_translate(origin);

        assert_eq!(local.min_x(), 3.0);
        assert_eq!(local.min_y(), 2.0);
        assert_eq!(local.max_x(), 7.0);
        assert_eq!(local.max_y(), 6.0);
    }

    #[test]
    fn test_zero_sized_bounds() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(0.0, 0.0));

        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert_eq!(bounds.bottom_anchor(), bounds.top_anchor());
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

    // ===================
    // Property Test Functions
    // ===================

    /// Translating then inverse translating should return the original bounds.
    fn check_translate_inverse_roundtrip(
        bounds: Bounds,
        offset: Point,
    ) -> Result<(), TestCaseError> {
        let roundtrip = bounds.translate(offset).inverse_translate(offset);

        prop_assert!(approx_eq!(
            f32,
            roundtrip.min_x(),
            bounds.min_x(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            roundtrip.min_y(),
            bounds.min_y(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            roundtrip.max_x(),
            bounds.max_x(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            roundtrip.max_y(),
            bounds.max_y(),
            epsilon = 0.001
        ));
        Ok(())
    }

    /// The bottom anchor should sit on the bottom edge, horizontally centered.
    fn check_bottom_anchor_on_bottom_edge(bounds: Bounds) -> Result<(), TestCaseError> {
        let anchor = bounds.bottom_anchor();

        prop_assert!(approx_eq!(f32, anchor.y(), bounds.max_y()));
        prop_assert!(anchor.x() >= bounds.min_x() && anchor.x() <= bounds.max_x());
        prop_assert!(approx_eq!(
            f32,
            anchor.x() - bounds.min_x(),
            bounds.max_x() - anchor.x(),
            epsilon = 0.01
        ));
        Ok(())
    }

    /// Top and bottom anchors should share an x-coordinate and differ by the height.
    fn check_anchors_are_vertically_aligned(bounds: Bounds) -> Result<(), TestCaseError> {
        let top = bounds.top_anchor();
        let bottom = bounds.bottom_anchor();

        prop_assert!(approx_eq!(f32, top.x(), bottom.x()));
        prop_assert!(approx_eq!(
            f32,
            bottom.y() - top.y(),
            bounds.height(),
            epsilon = 0.001
        ));
        Ok(())
    }

    /// Construction from top-left should preserve the supplied dimensions.
    fn check_top_left_construction_preserves_size(
        top_left: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let bounds = Bounds::new_from_top_left(top_left, size);

        prop_assert!(approx_eq!(f32, bounds.width(), size.width(), epsilon = 0.001));
        prop_assert!(approx_eq!(
            f32,
            bounds.height(),
            size.height(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(f32, bounds.min_x(), top_left.x()));
        prop_assert!(approx_eq!(f32, bounds.min_y(), top_left.y()));
        Ok(())
    }

    /// Adding then subtracting a point should return the original.
    fn check_add_sub_inverse(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result = p1.add_point(p2).sub_point(p2);

        prop_assert!(approx_eq!(f32, result.x(), p1.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, result.y(), p1.y(), epsilon = 0.001));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn translate_inverse_roundtrip(bounds in bounds_strategy(), offset in point_strategy()) {
            check_translate_inverse_roundtrip(bounds, offset)?;
        }

        #[test]
        fn bottom_anchor_on_bottom_edge(bounds in bounds_strategy()) {
            check_bottom_anchor_on_bottom_edge(bounds)?;
        }

        #[test]
        fn anchors_are_vertically_aligned(bounds in bounds_strategy()) {
            check_anchors_are_vertically_aligned(bounds)?;
        }

        #[test]
        fn top_left_construction_preserves_size(top_left in point_strategy(), size in size_strategy()) {
            check_top_left_construction_preserves_size(top_left, size)?;
        }

        #[test]
        fn add_sub_inverse(p1 in point_strategy(), p2 in point_strategy()) {
            check_add_sub_inverse(p1, p2)?;
        }
    }
}
