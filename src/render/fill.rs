//! Region fills and border tracing.
//!
//! All traversals use an explicit work stack. Work items are pushed in
//! reverse so they pop in the same order a depth-first recursion would visit
//! them, which keeps the painting order of the textured fill deterministic.
//!
//! The region is defined by the framebuffer's base color
//! ([`Framebuffer::base_color`]); sample it with
//! [`Framebuffer::sample_base`] before filling.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::texture::Texture;

/// Neighbor offsets explored by the border trace, in push order.
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Maximal run of base-colored pixels through `(x, y)`.
///
/// Returns the exclusive bounds `(left, right)`: the columns just outside the
/// run. When `(x, y)` is not base-colored both bounds equal `x` and the run is
/// empty.
fn base_run(fb: &Framebuffer, x: i32, y: i32, base: Color) -> (i32, i32) {
    let mut left = x;
    while fb.get_pixel(left, y) == Some(base) {
        left -= 1;
    }
    let mut right = x;
    while fb.get_pixel(right, y) == Some(base) {
        right += 1;
    }
    (left, right)
}

/// Scanline flood fill with a solid color.
///
/// A work item is skipped when it is outside the buffer, already has the
/// fill color, is black, or does not have the base color. Otherwise the
/// whole base-colored run through it is painted and every column of the run
/// schedules the row below, then the row above.
///
/// Colors are compared as they read back from the buffer, so filling with
/// the base color itself paints nothing. Returns the number of pixels
/// painted.
pub fn flood_fill(fb: &mut Framebuffer, seed: Point, color: Color) -> usize {
    let target = color.quantized();
    let base = fb.base_color().quantized();

    let mut painted = 0usize;
    let mut spans = 0usize;
    let mut stack = vec![seed];
    while let Some(Point { x, y }) = stack.pop() {
        let Some(pixel) = fb.get_pixel(x, y) else {
            continue;
        };
        if pixel == target || pixel == Color::BLACK || pixel != base {
            continue;
        }

        let (left, right) = base_run(fb, x, y, base);
        fb.fill_span(left + 1, right, y, target);
        painted += (right - left - 1) as usize;
        spans += 1;

        for i in (left + 1..right).rev() {
            stack.push(Point::new(i, y - 1));
            stack.push(Point::new(i, y + 1));
        }
    }

    debug!(spans, painted, "flood fill complete");
    painted
}

/// Flood fill that paints from a texture instead of a solid color.
///
/// The texture is tiled so that its centre lands on `anchor`: pixel `(x, y)`
/// takes texel `(x - anchor.x + w / 2, y - anchor.y + h / 2)`, wrapped.
///
/// Work items stop only at black pixels and the buffer edge. Painted texels
/// may themselves match the base color, so every examined run is remembered
/// per row and never examined twice. All rows below a run are visited before
/// the rows above it. Returns the number of pixels painted.
pub fn fill_texture(fb: &mut Framebuffer, seed: Point, texture: &Texture, anchor: Point) -> usize {
    let base = fb.base_color().quantized();
    let wrap = |half: u32, anchor: i32, size: u32| {
        (i64::from(half) - i64::from(anchor)).rem_euclid(i64::from(size)) as i32
    };
    let ox = wrap(texture.width() / 2, anchor.x, texture.width());
    let oy = wrap(texture.height() / 2, anchor.y, texture.height());

    let mut used: HashMap<i32, Vec<(i32, i32)>> = HashMap::new();
    let mut painted = 0usize;
    let mut stack = vec![seed];
    while let Some(Point { x, y }) = stack.pop() {
        let seen = used
            .get(&y)
            .is_some_and(|runs| runs.iter().any(|&(l, r)| l <= x && x <= r));
        if seen {
            continue;
        }
        match fb.get_pixel(x, y) {
            None => continue,
            Some(pixel) if pixel == Color::BLACK => continue,
            Some(_) => {}
        }

        let (left, right) = base_run(fb, x, y, base);
        used.entry(y).or_default().push((left, right));

        let ty = y + oy;
        for i in left + 1..right {
            let texel = texture.sample_wrapped(i + ox, ty);
            fb.set_bgra(i, y, texel);
            painted += 1;
        }

        for i in (left + 1..right).rev() {
            stack.push(Point::new(i, y - 1));
        }
        for i in (left + 1..right).rev() {
            stack.push(Point::new(i, y + 1));
        }
    }

    debug!(rows = used.len(), painted, "textured fill complete");
    painted
}

/// Collect the 8-connected group of near-black pixels bordering the region
/// around `seed`.
///
/// The start point walks left from `seed` until it reaches a pixel within
/// `threshold` of black (or column 0). From there every near-black pixel
/// reachable through the eight neighbor directions is returned, each once,
/// in visiting order. A seed outside the buffer yields no points.
#[must_use]
pub fn trace_border(fb: &Framebuffer, seed: Point, threshold: f64) -> Vec<Point> {
    if !fb.contains(seed.x, seed.y) {
        return Vec::new();
    }
    let width = fb.width() as usize;
    let mask = fb.similarity_mask(Color::BLACK, threshold);
    let is_dark = |p: Point| fb.contains(p.x, p.y) && mask[p.y as usize * width + p.x as usize];

    let mut start = seed;
    while start.x > 0 && !is_dark(start) {
        start.x -= 1;
    }

    let mut labeled = HashSet::new();
    let mut border = Vec::new();
    let mut stack = vec![start];
    while let Some(p) = stack.pop() {
        if labeled.contains(&p) || !is_dark(p) {
            continue;
        }
        labeled.insert(p);
        border.push(p);
        for (dx, dy) in DIRECTIONS {
            stack.push(p.offset(dx, dy));
        }
    }

    debug!(seed = ?seed, start = ?start, points = border.len(), "border traced");
    border
}

/// Recolor the border found by [`trace_border`] and return its points.
pub fn highlight(fb: &mut Framebuffer, seed: Point, color: Color, threshold: f64) -> Vec<Point> {
    let border = trace_border(fb, seed, threshold);
    let bgra = color.to_bgra();
    for p in &border {
        fb.set_bgra(p.x, p.y, bgra);
    }
    border
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_SIMILARITY_THRESHOLD;
    use crate::render::draw_polygon;

    /// 40x40 white buffer with a black square outline from (5, 5) to (30, 30).
    fn boxed() -> Framebuffer {
        let mut fb = Framebuffer::new(40, 40).unwrap();
        let square = [
            Point::new(5, 5),
            Point::new(30, 5),
            Point::new(30, 30),
            Point::new(5, 30),
        ];
        draw_polygon(&mut fb, &square, Color::BLACK);
        fb
    }

    fn count(fb: &Framebuffer, color: Color) -> usize {
        let mut n = 0;
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.get_pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    fn checker() -> Texture {
        let mut pixels = Vec::new();
        for c in [Color::RED, Color::GREEN, Color::BLUE, Color::bgr(0.0, 255.0, 255.0)] {
            pixels.extend_from_slice(&c.to_bgra());
        }
        Texture::new(2, 2, pixels).unwrap()
    }

    /// Direct recursive form of the textured fill.
    fn fill_texture_recursive(
        fb: &mut Framebuffer,
        x: i32,
        y: i32,
        used: &mut Vec<(i32, i32, i32)>,
        tex: &Texture,
        anchor: Point,
    ) {
        if used.iter().any(|&(l, r, row)| row == y && l <= x && x <= r) {
            return;
        }
        match fb.get_pixel(x, y) {
            None => return,
            Some(p) if p == Color::BLACK => return,
            Some(_) => {}
        }
        let base = fb.base_color();
        let (left, right) = base_run(fb, x, y, base);
        used.push((left, right, y));
        for i in left + 1..right {
            let t = tex.sample_wrapped(
                i - anchor.x + (tex.width() / 2) as i32,
                y - anchor.y + (tex.height() / 2) as i32,
            );
            fb.set_bgra(i, y, t);
        }
        for i in left + 1..right {
            fill_texture_recursive(fb, i, y + 1, used, tex, anchor);
        }
        for i in left + 1..right {
            fill_texture_recursive(fb, i, y - 1, used, tex, anchor);
        }
    }

    #[test]
    fn test_flood_fill_stays_inside_border() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        let painted = flood_fill(&mut fb, Point::new(15, 15), Color::RED);

        assert_eq!(painted, 24 * 24);
        assert_eq!(count(&fb, Color::RED), 24 * 24);
        assert_eq!(fb.get_pixel(6, 6), Some(Color::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Color::RED));
        assert_eq!(fb.get_pixel(5, 15), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(2, 2), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(35, 15), Some(Color::WHITE));
    }

    #[test]
    fn test_flood_fill_twice_is_noop() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        flood_fill(&mut fb, Point::new(15, 15), Color::RED);
        let before = fb.to_compact_pixels();

        assert_eq!(flood_fill(&mut fb, Point::new(15, 15), Color::RED), 0);
        assert_eq!(fb.to_compact_pixels(), before);
    }

    #[test]
    fn test_flood_fill_with_base_color_is_noop() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        assert_eq!(flood_fill(&mut fb, Point::new(15, 15), Color::WHITE), 0);
        // unquantized color that reads back as white
        assert_eq!(flood_fill(&mut fb, Point::new(15, 15), Color::bgr(255.2, 255.0, 254.9)), 0);
    }

    #[test]
    fn test_flood_fill_rejected_seeds() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        assert_eq!(flood_fill(&mut fb, Point::new(5, 5), Color::RED), 0);
        assert_eq!(flood_fill(&mut fb, Point::new(-1, 15), Color::RED), 0);
        assert_eq!(flood_fill(&mut fb, Point::new(15, 40), Color::RED), 0);

        // seed does not carry the base color
        fb.set_base_color(Color::GREEN);
        assert_eq!(flood_fill(&mut fb, Point::new(15, 15), Color::RED), 0);
    }

    #[test]
    fn test_flood_fill_outside_region() {
        let mut fb = boxed();
        fb.sample_base(1, 1);
        let painted = flood_fill(&mut fb, Point::new(1, 1), Color::BLUE);
        assert_eq!(painted, 40 * 40 - 26 * 26);
        assert_eq!(fb.get_pixel(15, 15), Some(Color::WHITE));
    }

    #[test]
    fn test_flood_fill_whole_buffer_does_not_overflow() {
        let mut fb = Framebuffer::new(800, 650).unwrap();
        fb.sample_base(400, 300);
        assert_eq!(flood_fill(&mut fb, Point::new(400, 300), Color::GREEN), 800 * 650);
    }

    #[test]
    fn test_fill_texture_anchors_centre() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        let tex = checker();
        let seed = Point::new(15, 15);
        let painted = fill_texture(&mut fb, seed, &tex, seed);

        assert_eq!(painted, 24 * 24);
        // texel (1, 1) lands on the anchor
        assert_eq!(fb.get_bgra(15, 15), tex.pixel(1, 1));
        assert_eq!(fb.get_bgra(16, 15), tex.pixel(0, 1));
        assert_eq!(fb.get_bgra(15, 16), tex.pixel(1, 0));
        assert_eq!(fb.get_pixel(5, 15), Some(Color::BLACK));
        assert_eq!(fb.get_pixel(2, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_texture_matches_recursive_form() {
        let tex = checker();
        let anchor = Point::new(11, 7);
        let seed = Point::new(20, 20);

        let mut a = boxed();
        a.set_pixel(12, 12, Color::BLACK);
        a.set_pixel(20, 9, Color::BLACK);
        a.sample_base(seed.x, seed.y);
        let mut b = a.clone();

        fill_texture(&mut a, seed, &tex, anchor);
        fill_texture_recursive(&mut b, seed.x, seed.y, &mut Vec::new(), &tex, anchor);
        assert_eq!(a.to_compact_pixels(), b.to_compact_pixels());
    }

    #[test]
    fn test_fill_texture_far_anchor_wraps() {
        let tex = checker();
        let seed = Point::new(15, 15);
        let mut near = boxed();
        near.sample_base(seed.x, seed.y);
        let mut far = near.clone();

        fill_texture(&mut near, seed, &tex, Point::new(1, 1));
        fill_texture(&mut far, seed, &tex, Point::new(i32::MIN + 1, i32::MAX));
        assert_eq!(near.to_compact_pixels(), far.to_compact_pixels());
    }

    #[test]
    fn test_fill_texture_of_base_color_terminates() {
        let mut fb = boxed();
        fb.sample_base(15, 15);
        let white = Texture::new(1, 1, Color::WHITE.to_bgra().to_vec()).unwrap();
        let before = fb.to_compact_pixels();

        assert_eq!(fill_texture(&mut fb, Point::new(15, 15), &white, Point::ORIGIN), 24 * 24);
        assert_eq!(fb.to_compact_pixels(), before);
    }

    #[test]
    fn test_trace_border_counts_perimeter() {
        let fb = boxed();
        let border = trace_border(&fb, Point::new(15, 15), DEFAULT_SIMILARITY_THRESHOLD);

        assert_eq!(border.len(), 4 * 25);
        assert_eq!(border[0], Point::new(5, 15));
        assert!(border.iter().all(|p| fb.get_pixel(p.x, p.y) == Some(Color::BLACK)));
    }

    #[test]
    fn test_trace_border_respects_threshold() {
        let mut fb = boxed();
        // near-black joins the border, mid-gray does not
        fb.set_pixel(31, 15, Color::bgr(20.0, 20.0, 20.0));
        fb.set_pixel(32, 15, Color::bgr(20.0, 20.0, 20.0));
        fb.set_pixel(4, 15, Color::bgr(100.0, 100.0, 100.0));

        let border = trace_border(&fb, Point::new(15, 15), DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(border.len(), 4 * 25 + 2);
        assert!(border.contains(&Point::new(32, 15)));
        assert!(!border.contains(&Point::new(4, 15)));
        for p in &border {
            let c = fb.get_pixel(p.x, p.y).unwrap();
            assert!(c.is_similar(Color::BLACK, DEFAULT_SIMILARITY_THRESHOLD));
        }
    }

    #[test]
    fn test_trace_border_without_border() {
        let fb = Framebuffer::new(10, 10).unwrap();
        assert!(trace_border(&fb, Point::new(5, 5), DEFAULT_SIMILARITY_THRESHOLD).is_empty());
        assert!(trace_border(&fb, Point::new(50, 5), DEFAULT_SIMILARITY_THRESHOLD).is_empty());
    }

    #[test]
    fn test_highlight_recolors_border() {
        let mut fb = boxed();
        let border = highlight(&mut fb, Point::new(15, 15), Color::RED, DEFAULT_SIMILARITY_THRESHOLD);

        assert_eq!(border.len(), 100);
        assert_eq!(count(&fb, Color::RED), 100);
        assert_eq!(count(&fb, Color::BLACK), 0);
    }
}
