//! Geometric primitives for graph layout, hit-testing and drawing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Modelgraph uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Node positions always refer to the node's top-left corner.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use modelgraph_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
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

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Clamps both coordinates to be non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modelgraph_core::geometry::Point;
    /// let clamped = Point::new(-12.0, 30.0).clamp_non_negative();
    /// assert_eq!(clamped, Point::new(0.0, 30.0));
    /// ```
    pub fn clamp_non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    /// Returns `true` when both coordinates differ from `other` by less than `epsilon`.
    pub fn is_near(self, other: Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// Angle in radians of the vector from `from` to this point.
    pub fn angle_from(self, from: Point) -> f32 {
        (self.y - from.y).atan2(self.x - from.x)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
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

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
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
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
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

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the bottom-right corner as a Point
    pub fn max_point(self) -> Point {
        Point {
            x: self.max_x,
            y: self.max_y,
        }
    }

    /// Returns `true` if the point lies inside the bounds, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modelgraph_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
    /// assert!(bounds.contains(Point::new(10.0, 30.0)));
    /// assert!(!bounds.contains(Point::new(30.5, 15.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
        assert_eq!(
            Point::new(0.0, 0.0).midpoint(Point::new(10.0, -20.0)),
            Point::new(5.0, -10.0)
        );
    }

    #[test]
    fn test_point_clamp_non_negative() {
        assert_eq!(
            Point::new(-5.0, -0.5).clamp_non_negative(),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            Point::new(7.0, -3.0).clamp_non_negative(),
            Point::new(7.0, 0.0)
        );
    }

    #[test]
    fn test_point_is_near() {
        let p = Point::new(100.0, 100.0);
        assert!(p.is_near(Point::new(100.5, 99.5), 1.0));
        assert!(!p.is_near(Point::new(101.0, 100.0), 1.0));
        assert!(!p.is_near(Point::new(100.0, 98.0), 1.0));
    }

    #[test]
    fn test_point_angle_from() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(Point::new(10.0, 0.0).angle_from(origin), 0.0);
        let down = Point::new(0.0, 10.0).angle_from(origin);
        assert!((down - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_size_max() {
        let a = Size::new(100.0, 50.0);
        let b = Size::new(80.0, 70.0);
        assert_eq!(a.max(b), Size::new(100.0, 70.0));
        assert_eq!(a.max(a), a);
    }

    #[test]
    fn test_bounds_from_node_box() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(160.0, 100.0));
        assert_eq!(bounds.min_x(), 50.0);
        assert_eq!(bounds.max_y(), 150.0);
        assert_eq!(bounds.center(), Point::new(130.0, 100.0));
        assert_eq!(bounds.min_point(), Point::new(50.0, 50.0));
        assert_eq!(bounds.max_point(), Point::new(210.0, 150.0));
    }

    #[test]
    fn test_bounds_contains_is_inclusive() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(-0.1, 5.0)));
        assert!(!bounds.contains(Point::new(5.0, 10.1)));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            1.0f32..500.0,
            1.0f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Subtracting then adding the same offset returns the starting point.
    fn check_offset_round_trip(p: Point, offset: Point) -> Result<(), TestCaseError> {
        let back = p.sub_point(offset).add_point(offset);
        prop_assert!(approx_eq!(f32, back.x(), p.x(), epsilon = 1e-3));
        prop_assert!(approx_eq!(f32, back.y(), p.y(), epsilon = 1e-3));
        Ok(())
    }

    /// Clamping never yields a negative coordinate and leaves non-negative ones untouched.
    fn check_clamp_non_negative(p: Point) -> Result<(), TestCaseError> {
        let clamped = p.clamp_non_negative();

        prop_assert!(clamped.x() >= 0.0);
        prop_assert!(clamped.y() >= 0.0);
        if p.x() >= 0.0 {
            prop_assert!(approx_eq!(f32, clamped.x(), p.x()));
        }
        if p.y() >= 0.0 {
            prop_assert!(approx_eq!(f32, clamped.y(), p.y()));
        }
        Ok(())
    }

    /// Bounds contain their corners and center.
    fn check_bounds_contains_own_points(b: Bounds) -> Result<(), TestCaseError> {
        prop_assert!(b.contains(b.min_point()));
        prop_assert!(b.contains(b.max_point()));
        prop_assert!(b.contains(b.center()));
        Ok(())
    }

    proptest! {
        #[test]
        fn offset_round_trip(p in point_strategy(), offset in point_strategy()) {
            check_offset_round_trip(p, offset)?;
        }

        #[test]
        fn clamp_non_negative(p in point_strategy()) {
            check_clamp_non_negative(p)?;
        }

        #[test]
        fn bounds_contains_own_points(b in bounds_strategy()) {
            check_bounds_contains_own_points(b)?;
        }
    }
}
