//! Polygons, directed edges and point containment.

use crate::geometry::Point;

/// Horizontal lean of an [`Edge`] going from its upper to its lower vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `down` lies left of `up` (`up.x > down.x`).
    Left,
    /// `down` lies right of or directly below `up`.
    Right,
}

/// A polygon edge normalized so that `up.y <= down.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    up: Point,
    down: Point,
    direction: Direction,
}

impl Edge {
    /// Build an edge from two vertices in boundary order.
    ///
    /// When both vertices share a row the first one becomes `up`.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        let (up, down) = if p1.y > p2.y { (p2, p1) } else { (p1, p2) };
        let direction = if up.x > down.x {
            Direction::Left
        } else {
            Direction::Right
        };
        Self { up, down, direction }
    }

    /// Vertex with the smaller y.
    #[must_use]
    pub const fn up(&self) -> Point {
        self.up
    }

    /// Vertex with the larger y.
    #[must_use]
    pub const fn down(&self) -> Point {
        self.down
    }

    /// Horizontal lean of the edge.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Both vertices lie on the same row.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.up.y == self.down.y
    }

    /// Sign test of `q` against the edge's supporting line.
    #[must_use]
    pub fn is_right(&self, q: Point) -> bool {
        let (up, down) = (self.up, self.down);
        let (dx, dy) = (i128::from(down.x), i128::from(down.y));
        let cross = (i128::from(up.x) - dx) * (i128::from(q.y) - dy)
            - (i128::from(up.y) - dy) * (i128::from(q.x) - dx);
        cross > 0
    }
}

/// Ordered ring of vertices; insertion order is boundary order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create an empty polygon.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create a polygon from vertices in boundary order.
    #[must_use]
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Append a vertex to the boundary.
    pub fn push(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Vertices in boundary order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed ring of edges: one per vertex, last wrapping to first.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Arithmetic mean of the vertices, truncated toward zero.
    ///
    /// Returns `None` for an empty polygon.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as i64;
        let sx: i64 = self.vertices.iter().map(|p| i64::from(p.x)).sum();
        let sy: i64 = self.vertices.iter().map(|p| i64::from(p.y)).sum();
        Some(Point::new((sx / n) as i32, (sy / n) as i32))
    }

    /// Bounding box as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let (min, max) = self.vertices.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }

    /// Edge-crossing parity test.
    ///
    /// Horizontal edges and edges whose lower vertex sits on the query row
    /// are skipped, so a vertex shared by two edges is counted at most once.
    /// The remaining edges count when the row lies in `[up.y, down.y)`, the
    /// point is on the edge's right side, and the direction-dependent x
    /// threshold holds (`down.x` for [`Direction::Left`], `up.x` for
    /// [`Direction::Right`]).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let crossings = self
            .edges()
            .iter()
            .filter(|edge| {
                if edge.is_horizontal() || point.y == edge.down.y {
                    return false;
                }
                if !(point.y < edge.down.y && point.y >= edge.up.y && edge.is_right(point)) {
                    return false;
                }
                match edge.direction {
                    Direction::Left => edge.down.x < point.x,
                    Direction::Right => edge.up.x < point.x,
                }
            })
            .count();
        crossings % 2 == 1
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_vertices(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_vertices(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ])
    }

    #[test]
    fn test_edge_normalization() {
        let e = Edge::new(Point::new(3, 9), Point::new(7, 1));
        assert_eq!(e.up(), Point::new(7, 1));
        assert_eq!(e.down(), Point::new(3, 9));
        assert_eq!(e.direction(), Direction::Left);
        assert!(!e.is_horizontal());

        let flat = Edge::new(Point::new(5, 4), Point::new(1, 4));
        assert_eq!(flat.up(), Point::new(5, 4));
        assert!(flat.is_horizontal());
    }

    #[test]
    fn test_edge_vertical_is_right_direction() {
        let e = Edge::new(Point::new(2, 0), Point::new(2, 8));
        assert_eq!(e.direction(), Direction::Right);
    }

    #[test]
    fn test_edges_form_closed_ring() {
        let poly = square();
        let edges = poly.edges();
        assert_eq!(edges.len(), poly.len());
        assert_eq!(edges[3], Edge::new(Point::new(0, 10), Point::new(0, 0)));
    }

    #[test]
    fn test_centroid_truncates() {
        let tri = Polygon::from_vertices(vec![Point::new(0, 0), Point::new(5, 0), Point::new(0, 5)]);
        assert_eq!(tri.centroid(), Some(Point::new(1, 1)));
        assert_eq!(Polygon::new().centroid(), None);
    }

    #[test]
    fn test_contains_square() {
        let poly = square();
        assert!(poly.contains(Point::new(5, 5)));
        assert!(poly.contains(Point::new(1, 9)));
        assert!(!poly.contains(Point::new(15, 5)));
        assert!(!poly.contains(Point::new(-5, 5)));
        assert!(!poly.contains(Point::new(5, 50)));
    }

    #[test]
    fn test_contains_on_horizontal_edge_rows() {
        let poly = square();
        // bottom row is every edge's `down.y`, so nothing is counted there
        assert!(!poly.contains(Point::new(5, 10)));
        // top row is counted once by the left edge
        assert!(poly.contains(Point::new(5, 0)));
    }

    #[test]
    fn test_contains_concave() {
        // U shape opening upwards
        let poly = Polygon::from_vertices(vec![
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 6),
            Point::new(6, 6),
            Point::new(6, 0),
            Point::new(9, 0),
            Point::new(9, 9),
            Point::new(0, 9),
        ]);
        assert!(poly.contains(Point::new(1, 3)));
        assert!(poly.contains(Point::new(8, 3)));
        assert!(!poly.contains(Point::new(4, 3)));
        assert!(poly.contains(Point::new(4, 7)));
    }

    #[test]
    fn test_contains_extreme_coordinates() {
        let poly = Polygon::from_vertices(vec![
            Point::new(-2_000_000_000, -2_000_000_000),
            Point::new(2_000_000_000, -2_000_000_000),
            Point::new(0, 2_000_000_000),
        ]);
        assert!(poly.contains(Point::new(0, 0)));
        assert!(!poly.contains(Point::new(i32::MAX, i32::MAX - 1)));
        assert!(!poly.contains(Point::new(i32::MIN, 0)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(square().bounds(), Some((Point::new(0, 0), Point::new(10, 10))));
        assert_eq!(Polygon::new().bounds(), None);
    }
}
