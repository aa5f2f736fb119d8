//! Convex hull by Graham scan.
//!
//! # Algorithm
//!
//! 1. The pivot is the first point with the minimum y.
//! 2. Points are stably sorted by `atan2(dy, dx)` of the vector from the pivot.
//! 3. A stack seeded with the first two sorted points is extended point by
//!    point, popping while the last two stack points and the candidate turn
//!    the wrong way (`Point::rotate < 0`).
//!
//! The pop test is strict, so collinear candidates stay on the hull. A point
//! set whose boundary contains collinear runs can therefore yield extra,
//! non-minimal vertices.
//!
//! # References
//!
//! - Graham, R. L. (1972). "An Efficient Algorithm for Determining the Convex
//!   Hull of a Finite Planar Set." *Information Processing Letters*, 1(4).

use std::collections::HashSet;

use tracing::debug;

use crate::geometry::Point;
use crate::polygon::Polygon;

/// Convex hull of a point set, computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hull {
    points: Vec<Point>,
}

impl Hull {
    /// Compute the hull of `points`.
    ///
    /// The input is copied; later changes to the caller's points do not
    /// affect the hull. Repeated points are considered once. With fewer than
    /// three distinct points the result is those points in scan order.
    #[must_use]
    pub fn new(points: &[Point]) -> Self {
        let mut seen = HashSet::with_capacity(points.len());
        let mut sorted: Vec<Point> = points.iter().copied().filter(|p| seen.insert(*p)).collect();

        // stable, so the first minimum-y point in input order becomes the pivot
        sorted.sort_by_key(|p| p.y);
        let Some(&pivot) = sorted.first() else {
            return Self::default();
        };
        sorted.sort_by(|a, b| polar_angle(pivot, *a).total_cmp(&polar_angle(pivot, *b)));

        let mut stack: Vec<Point> = Vec::with_capacity(sorted.len());
        for (i, &candidate) in sorted.iter().enumerate() {
            if i >= 2 {
                while stack.len() >= 2
                    && Point::rotate(stack[stack.len() - 2], stack[stack.len() - 1], candidate) < 0
                {
                    stack.pop();
                }
            }
            stack.push(candidate);
        }

        debug!(input = points.len(), hull = stack.len(), "convex hull computed");
        Self { points: stack }
    }

    /// Hull vertices in boundary order, starting at the pivot.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of hull vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Hull has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Hull as a polygon ring.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_vertices(self.points.clone())
    }
}

fn polar_angle(pivot: Point, p: Point) -> f64 {
    (f64::from(p.y) - f64::from(pivot.y)).atan2(f64::from(p.x) - f64::from(pivot.x))
}
