//! Point markers, outlines and the [`Drawable`] trait.

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point};
use crate::hull::Hull;
use crate::polygon::Polygon;

use super::line::{draw_line_bresenham, draw_line_wu};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Color);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa(&self, fb: &mut Framebuffer, color: Color) {
        self.draw(fb, color);
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Draw a point marker: a filled disc of radius `thickness / 2`.
///
/// A thickness of 0 or 1 paints the single pixel under `point`.
pub fn draw_point(fb: &mut Framebuffer, point: Point, color: Color, thickness: u32) {
    let radius = (thickness / 2) as i32;
    draw_disc(fb, point.x, point.y, radius, color);
}

/// Filled disc: every pixel `(cx + j, cy + i)` with `i*i + j*j <= r*r`,
/// painted one row span at a time. Rows outside the buffer are skipped.
fn draw_disc(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius <= 0 {
        fb.set_pixel(cx, cy, color);
        return;
    }

    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let top = (cy - r).max(0);
    let bottom = (cy + r).min(i64::from(fb.height()) - 1);
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    for y in top..=bottom {
        let dy = y - cy;
        let half = isqrt(r * r - dy * dy);
        fb.fill_span(clamp(cx - half), clamp(cx + half + 1), y as i32, color);
    }
}

/// Largest `h` with `h * h <= n`, for `n >= 0`.
fn isqrt(n: i64) -> i64 {
    let mut h = (n as f64).sqrt() as i64;
    while h * h > n {
        h -= 1;
    }
    while (h + 1) * (h + 1) <= n {
        h += 1;
    }
    h
}

// ============================================================================
// Outlines
// ============================================================================

/// Draw a closed outline through `vertices`, last vertex joined to the first.
pub fn draw_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Color) {
    for_each_side(vertices, |a, b| draw_line_bresenham(fb, a, b, color));
}

fn draw_polygon_aa(fb: &mut Framebuffer, vertices: &[Point], color: Color) {
    for_each_side(vertices, |a, b| draw_line_wu(fb, a, b, color));
}

fn for_each_side(vertices: &[Point], mut side: impl FnMut(Point, Point)) {
    match vertices {
        [] => {}
        [only] => side(*only, *only),
        _ => {
            let n = vertices.len();
            for i in 0..n {
                side(vertices[i], vertices[(i + 1) % n]);
            }
        }
    }
}

impl Drawable for Point {
    fn draw(&self, fb: &mut Framebuffer, color: Color) {
        fb.set_pixel(self.x, self.y, color);
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Color) {
        draw_line_bresenham(fb, self.start, self.end, color);
    }

    fn draw_aa(&self, fb: &mut Framebuffer, color: Color) {
        draw_line_wu(fb, self.start, self.end, color);
    }
}

impl Drawable for Polygon {
    fn draw(&self, fb: &mut Framebuffer, color: Color) {
        draw_polygon(fb, self.vertices(), color);
    }

    fn draw_aa(&self, fb: &mut Framebuffer, color: Color) {
        draw_polygon_aa(fb, self.vertices(), color);
    }
}

impl Drawable for Hull {
    fn draw(&self, fb: &mut Framebuffer, color: Color) {
        draw_polygon(fb, self.points(), color);
    }

    fn draw_aa(&self, fb: &mut Framebuffer, color: Color) {
        draw_polygon_aa(fb, self.points(), color);
    }
}

// ============================================================================
// Tests
// ============================================================================
