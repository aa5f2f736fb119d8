//! Line rasterizers.
//!
//! Both algorithms write straight into the framebuffer and clip silently at
//! its edges.

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Which rasterizer to use for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Integer Bresenham, one solid pixel per major-axis step.
    #[default]
    Bresenham,
    /// Xiaolin Wu, two coverage-weighted pixels per major-axis step.
    Wu,
}

/// Draw the segment `a`-`b` with the chosen algorithm.
pub fn draw_line(fb: &mut Framebuffer, algorithm: LineAlgorithm, a: Point, b: Point, color: Color) {
    match algorithm {
        LineAlgorithm::Bresenham => draw_line_bresenham(fb, a, b, color),
        LineAlgorithm::Wu => draw_line_wu(fb, a, b, color),
    }
}

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// The axis with the larger delta is stepped one pixel at a time, so the
/// line has no gaps. Endpoints are ordered along the major axis and the minor
/// axis steps by ±1. Each pixel is plotted before the error term is updated,
/// which paints both endpoints exactly.
///
/// Only the part of the major axis inside the buffer is walked.
pub fn draw_line_bresenham(fb: &mut Framebuffer, a: Point, b: Point, color: Color) {
    let bgra = color.to_bgra();
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).abs();

    if dy <= dx {
        let (a, b) = if a.x > b.x { (b, a) } else { (a, b) };
        let limit = i64::from(fb.width());
        bresenham_run((a.x, a.y), (b.x, b.y), limit, |x, y| fb.set_bgra(x, y, bgra));
    } else {
        let (a, b) = if a.y > b.y { (b, a) } else { (a, b) };
        let limit = i64::from(fb.height());
        bresenham_run((a.y, a.x), (b.y, b.x), limit, |y, x| fb.set_bgra(x, y, bgra));
    }
}

/// Walk the major axis from `from` to `to` (`from.0 <= to.0`), plotting
/// `(major, minor)` for the major coordinates in `0..limit`.
///
/// Before step `k` the error is `2*dn*(k + 1) - dm - 2*dm*m` where `m` is
/// the number of minor steps taken so far, and it always lies in
/// `(2*dn - 2*dm, 2*dn]`. That pins down `m` at the first visible step, so
/// the walk starts there and still plots the same pixels.
fn bresenham_run(from: (i32, i32), to: (i32, i32), limit: i64, mut plot: impl FnMut(i32, i32)) {
    let (major0, minor0) = (i64::from(from.0), i64::from(from.1));
    let (major1, minor1) = (i64::from(to.0), i64::from(to.1));
    let d_major = major1 - major0;
    let d_minor = (minor1 - minor0).abs();
    let step = if minor1 >= minor0 { 1 } else { -1 };

    let first = major0.max(0);
    let last = major1.min(limit - 1);
    if first > last {
        return;
    }

    let (dm, dn) = (i128::from(d_major), i128::from(d_minor));
    let k = i128::from(first - major0);
    let m = if d_major == 0 { 0 } else { ceil_div(2 * dn * k - dm, 2 * dm) };
    let mut err = (2 * dn * (k + 1) - dm - 2 * dm * m) as i64;
    let mut minor = minor0 + step * m as i64;

    for major in first..=last {
        plot(major as i32, minor as i32);
        if err > 0 {
            minor += step;
            err -= 2 * d_major;
        }
        err += 2 * d_minor;
    }
}

/// `ceil(a / b)` for positive `b`.
fn ceil_div(a: i128, b: i128) -> i128 {
    -(-a).div_euclid(b)
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Steep lines are transposed and endpoints ordered left to right before a
/// fixed gradient is computed. Every column gets a vertically adjacent pixel
/// pair whose alphas are the complementary fractional parts of the ideal y.
/// Alpha is written directly, not composited over the existing pixel.
///
/// Endpoints are pixel centres, so each endpoint pair splits full coverage.
/// Interior columns outside the buffer are skipped.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_wu(fb: &mut Framebuffer, a: Point, b: Point, color: Color) {
    let steep = (i64::from(b.y) - i64::from(a.y)).abs() > (i64::from(b.x) - i64::from(a.x)).abs();

    let (x0, y0, x1, y1) = if steep {
        (a.y, a.x, b.y, b.x)
    } else {
        (a.x, a.y, b.x, b.y)
    };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = f64::from(x1) - f64::from(x0);
    let dy = f64::from(y1) - f64::from(y0);
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };
    let limit = i64::from(if steep { fb.height() } else { fb.width() });

    let mut plot = |major: i32, minor: i32, coverage: f64| {
        let c = color.with_alpha(color.alpha * coverage);
        if steep {
            fb.set_pixel(minor, major, c);
        } else {
            fb.set_pixel(major, minor, c);
        }
    };

    let start_y = f64::from(y0);
    plot(x0, ipart(start_y), rfpart(start_y));
    plot(x0, ipart(start_y).saturating_add(1), fpart(start_y));

    let end_y = f64::from(y1);
    plot(x1, ipart(end_y), rfpart(end_y));
    plot(x1, ipart(end_y).saturating_add(1), fpart(end_y));

    let first = (i64::from(x0) + 1).max(0);
    let last = (i64::from(x1) - 1).min(limit - 1);
    let mut intery = start_y + gradient * (first - i64::from(x0)) as f64;
    for x in first..=last {
        plot(x as i32, ipart(intery), rfpart(intery));
        plot(x as i32, ipart(intery).saturating_add(1), fpart(intery));
        intery += gradient;
    }
}

#[inline]
fn ipart(v: f64) -> i32 {
    v.floor() as i32
}

/// Fractional part of a float.
#[inline]
fn fpart(v: f64) -> f64 {
    v - v.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(v: f64) -> f64 {
    1.0 - fpart(v)
}
