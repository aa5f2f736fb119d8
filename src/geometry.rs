//! Geometric primitives on the integer pixel grid.

use serde::{Deserialize, Serialize};

/// A 2D point with integer grid coordinates.
///
/// Compares and hashes by value, so points can key sets and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downwards).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, truncated toward zero.
    #[must_use]
    pub fn distance(self, other: Self) -> i32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt() as i32
    }

    /// Translate by `(dx, dy)`, saturating at the grid limits.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Cross product of `b - a` and `c - a`.
    ///
    /// Zero for collinear points. The hull scan treats a negative value as a
    /// turn in the wrong direction.
    #[must_use]
    pub fn rotate(a: Self, b: Self, c: Self) -> i128 {
        let (ax, ay) = (i128::from(a.x), i128::from(a.y));
        (i128::from(b.x) - ax) * (i128::from(c.y) - ay) - (i128::from(c.x) - ax) * (i128::from(b.y) - ay)
    }

    /// Exchange the coordinates of two points.
    pub fn swap(a: &mut Self, b: &mut Self) {
        std::mem::swap(a, b);
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Start x.
    #[must_use]
    pub const fn x1(&self) -> i32 {
        self.start.x
    }

    /// Start y.
    #[must_use]
    pub const fn y1(&self) -> i32 {
        self.start.y
    }

    /// End x.
    #[must_use]
    pub const fn x2(&self) -> i32 {
        self.end.x
    }

    /// End y.
    #[must_use]
    pub const fn y2(&self) -> i32 {
        self.end.y
    }

    /// Midpoint with integer division.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point::new(mid(self.start.x, self.end.x), mid(self.start.y, self.end.y))
    }

    /// Truncated length of the segment.
    #[must_use]
    pub fn length(&self) -> i32 {
        self.start.distance(self.end)
    }

    /// Intersection of two segments.
    ///
    /// Solves `start + t * (end - start)` against the other segment's
    /// supporting line and accepts only when the parameter lies in `[0, 1]`
    /// for both segments. Parallel and collinear segments (zero determinant)
    /// have no intersection. The result is truncated to the grid.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        let (a, b) = (self.start, self.end);
        let (c, d) = (other.start, other.end);

        let delta = |from: i32, to: i32| f64::from(to) - f64::from(from);
        let abx = delta(a.x, b.x);
        let aby = delta(a.y, b.y);
        let cdx = delta(c.x, d.x);
        let cdy = delta(c.y, d.y);
        let acx = delta(a.x, c.x);
        let acy = delta(a.y, c.y);

        let determinant = abx * cdy - aby * cdx;
        if determinant == 0.0 {
            return None;
        }

        let t = (acx * cdy - acy * cdx) / determinant;
        let u = (acx * aby - acy * abx) / determinant;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        Some(Point::new(
            (f64::from(a.x) + t * abx) as i32,
            (f64::from(a.y) + t * aby) as i32,
        ))
    }
}
