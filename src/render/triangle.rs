//! Color-shaded triangles.
//!
//! Two rasterizers produce the same linear (not perspective-corrected)
//! shading by different means:
//!
//! - [`draw_triangle_scanline`] walks rows, finds each row's extent by
//!   probing with [`is_point_in_triangle`], interpolates the edge colors in
//!   y and then the row in x.
//! - [`draw_triangle_barycentric`] visits the bounding box and solves for
//!   the weights of the two edge vectors leaving the first vertex.
//!
//! Degenerate (zero-area) triangles draw nothing in either rasterizer.

use tracing::debug;

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// A triangle corner and the color it carries.
pub type Vertex = (Point, Color);

/// Which rasterizer shades a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleShading {
    /// Row-by-row interpolation between edge colors.
    #[default]
    Scanline,
    /// Per-pixel barycentric weights.
    Barycentric,
}

/// Shade the triangle `a`, `b`, `c` with the chosen rasterizer.
pub fn draw_triangle(fb: &mut Framebuffer, shading: TriangleShading, a: Vertex, b: Vertex, c: Vertex) {
    match shading {
        TriangleShading::Scanline => draw_triangle_scanline(fb, a, b, c),
        TriangleShading::Barycentric => draw_triangle_barycentric(fb, a, b, c),
    }
}

/// Sign-consistency test of `p` against the three half-planes of `a`, `b`, `c`.
///
/// Points on an edge are inside. Works for either winding.
#[must_use]
pub fn is_point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = half_plane(p, a, b);
    let d2 = half_plane(p, b, c);
    let d3 = half_plane(p, c, a);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
    !(has_neg && has_pos)
}

fn half_plane(p: Point, a: Point, b: Point) -> i128 {
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    (i128::from(p.x) - bx) * (i128::from(a.y) - by) - (i128::from(a.x) - bx) * (i128::from(p.y) - by)
}

/// Canonical corner order: the top vertex (smallest y, then smallest x)
/// first, the other two by x (then y).
///
/// The input is not modified; the same triple always yields the same order.
#[must_use]
pub fn order_vertices(vertices: [Vertex; 3]) -> [Vertex; 3] {
    let mut v = vertices;
    v.sort_by_key(|(p, _)| (p.y, p.x));
    v[1..].sort_by_key(|(p, _)| (p.x, p.y));
    v
}

/// Linear blend from `from` (t = 0) to `to` (t = 1).
fn lerp(from: Color, to: Color, t: f64) -> Color {
    from + (to - from) * t
}

fn is_degenerate(a: Point, b: Point, c: Point) -> bool {
    Point::rotate(a, b, c) == 0
}

/// Inclusive bounding box clipped to the buffer, or `None` when nothing of
/// it is visible.
fn clipped_bounds(fb: &Framebuffer, pts: [Point; 3]) -> Option<(Point, Point)> {
    let min_x = pts.iter().map(|p| p.x).min()?.max(0);
    let min_y = pts.iter().map(|p| p.y).min()?.max(0);
    let max_x = pts.iter().map(|p| p.x).max()?.min(fb.width() as i32 - 1);
    let max_y = pts.iter().map(|p| p.y).max()?.min(fb.height() as i32 - 1);
    (min_x <= max_x && min_y <= max_y).then(|| (Point::new(min_x, min_y), Point::new(max_x, max_y)))
}

/// Where the row `y` meets the edge `from`-`to`, with the color there.
///
/// A horizontal edge on the row meets it at both of its vertices.
fn edge_crossings(from: Vertex, to: Vertex, y: i32, out: &mut Vec<(f64, Color)>) {
    let ((p, pc), (q, qc)) = (from, to);
    if y < p.y.min(q.y) || y > p.y.max(q.y) {
        return;
    }
    if p.y == q.y {
        out.push((f64::from(p.x), pc));
        out.push((f64::from(q.x), qc));
        return;
    }
    let t = (f64::from(y) - f64::from(p.y)) / (f64::from(q.y) - f64::from(p.y));
    let x = f64::from(p.x) + t * (f64::from(q.x) - f64::from(p.x));
    out.push((x, lerp(pc, qc, t)));
}

/// Scanline-interpolated triangle.
///
/// Each row's first and last covered pixels are found by probing inward from
/// the bounding box. The row's left and right colors are those of the
/// outermost points where the triangle's edges cross the row, and every
/// pixel in between blends them linearly in x.
pub fn draw_triangle_scanline(fb: &mut Framebuffer, a: Vertex, b: Vertex, c: Vertex) {
    let [v1, v2, v3] = order_vertices([a, b, c]);
    let (p1, p2, p3) = (v1.0, v2.0, v3.0);
    if is_degenerate(p1, p2, p3) {
        return;
    }
    let Some((min, max)) = clipped_bounds(fb, [p1, p2, p3]) else {
        return;
    };

    let mut rows = 0usize;
    let mut crossings = Vec::with_capacity(4);
    for y in min.y..=max.y {
        let inside = |x: i32| is_point_in_triangle(Point::new(x, y), p1, p2, p3);
        let Some(left) = (min.x..=max.x).find(|&x| inside(x)) else {
            continue;
        };
        let Some(right) = (left..=max.x).rev().find(|&x| inside(x)) else {
            continue;
        };

        crossings.clear();
        edge_crossings(v1, v2, y, &mut crossings);
        edge_crossings(v2, v3, y, &mut crossings);
        edge_crossings(v3, v1, y, &mut crossings);
        let Some(&(xl, cl)) = crossings.iter().min_by(|l, r| l.0.total_cmp(&r.0)) else {
            continue;
        };
        let Some(&(xr, cr)) = crossings.iter().max_by(|l, r| l.0.total_cmp(&r.0)) else {
            continue;
        };

        for x in left..=right {
            let color = if xr > xl {
                lerp(cl, cr, (f64::from(x) - xl) / (xr - xl))
            } else {
                cl
            };
            fb.set_pixel(x, y, color);
        }
        rows += 1;
    }

    debug!(rows, "scanline triangle drawn");
}

/// Barycentric-shaded triangle.
///
/// With `e1 = b - a` and `e2 = c - a`, a pixel at offset `(x, y)` from `a`
/// is covered when its weights `w1`, `w2` (solving
/// `w1 * e1 + w2 * e2 = (x, y)`) are non-negative and sum to at most 1. Its
/// color is `ca + (cb - ca) * w1 + (cc - ca) * w2`.
pub fn draw_triangle_barycentric(fb: &mut Framebuffer, a: Vertex, b: Vertex, c: Vertex) {
    let ((pa, ca), (pb, cb), (pc, cc)) = (a, b, c);
    let delta = |from: i32, to: i32| f64::from(to) - f64::from(from);
    let (e1x, e1y) = (delta(pa.x, pb.x), delta(pa.y, pb.y));
    let (e2x, e2y) = (delta(pa.x, pc.x), delta(pa.y, pc.y));

    let det = e1x * e2y - e1y * e2x;
    if det == 0.0 {
        return;
    }
    let Some((min, max)) = clipped_bounds(fb, [pa, pb, pc]) else {
        return;
    };

    let (db, dc) = (cb - ca, cc - ca);
    let mut painted = 0usize;
    for y in min.y..=max.y {
        let ry = delta(pa.y, y);
        for x in min.x..=max.x {
            let rx = delta(pa.x, x);
            let w1 = (rx * e2y - ry * e2x) / det;
            let w2 = (e1x * ry - e1y * rx) / det;
            if w1 >= 0.0 && w2 >= 0.0 && w1 + w2 <= 1.0 {
                fb.set_pixel(x, y, ca + db * w1 + dc * w2);
                painted += 1;
            }
        }
    }

    debug!(painted, "barycentric triangle drawn");
}
