//! Point-editing session over a single canvas.
//!
//! A [`Sketch`] owns the canvas and the list of hull input points, and keeps
//! the two in step: adding a point draws its marker, removing one redraws
//! every remaining marker, and building the hull outlines it on top.
//! Translating pointer events into canvas coordinates is left to the caller.

use tracing::debug;

use crate::color::Color;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::hull::Hull;
use crate::render::{self, Drawable};

/// Canvas plus hull input points.
#[derive(Debug, Clone)]
pub struct Sketch {
    config: RasterConfig,
    fb: Framebuffer,
    points: Vec<Point>,
}

impl Sketch {
    /// Open a session sized by `config`, with its points already drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: RasterConfig) -> Result<Self> {
        config.validate()?;
        let fb = Framebuffer::new(config.width, config.height)?;
        let points = config.points.clone();
        let mut sketch = Self { config, fb, points };
        sketch.redraw();
        Ok(sketch)
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Recorded points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The canvas.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Mutable canvas, for drawing that bypasses the point list.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    /// Record `point` and draw its marker.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.draw_marker(point);
        debug!(x = point.x, y = point.y, total = self.points.len(), "point added");
    }

    /// Closest recorded point, if it lies within the pick radius of `near`.
    ///
    /// Among equally close points the earliest recorded wins.
    #[must_use]
    pub fn nearest_point(&self, near: Point) -> Option<Point> {
        let target = self.points.iter().copied().min_by_key(|p| p.distance(near))?;
        let radius = i32::try_from(self.config.pick_radius).unwrap_or(i32::MAX);
        (target.distance(near) <= radius).then_some(target)
    }

    /// Remove the point picked at `near` and redraw the remaining markers.
    ///
    /// Returns the removed point, or `None` (changing nothing) when no point
    /// is close enough.
    pub fn remove_point(&mut self, near: Point) -> Option<Point> {
        let target = self.nearest_point(near)?;
        let index = self.points.iter().position(|p| *p == target)?;
        self.points.remove(index);
        self.redraw();
        debug!(x = target.x, y = target.y, total = self.points.len(), "point removed");
        Some(target)
    }

    /// Clear the canvas to white and redraw every point marker.
    pub fn redraw(&mut self) {
        self.fb.clear(Color::WHITE);
        for i in 0..self.points.len() {
            self.draw_marker(self.points[i]);
        }
    }

    /// Compute the hull of the recorded points and outline it.
    ///
    /// Returns `None` without drawing when there are no points.
    pub fn build_hull(&mut self) -> Option<Hull> {
        if self.points.is_empty() {
            return None;
        }
        let hull = Hull::new(&self.points);
        hull.draw(&mut self.fb, self.config.hull_color);
        Some(hull)
    }

    /// Forget every point and clear the canvas.
    pub fn clear(&mut self) {
        self.points.clear();
        self.fb.clear(Color::WHITE);
    }

    /// Draw a segment in the configured line color.
    pub fn draw_line(&mut self, a: Point, b: Point, algorithm: render::LineAlgorithm) {
        render::draw_line(&mut self.fb, algorithm, a, b, self.config.line_color);
    }

    /// Sample the base color under `seed` and flood fill from there.
    ///
    /// Returns the number of pixels painted.
    pub fn fill(&mut self, seed: Point, color: Color) -> usize {
        if self.fb.sample_base(seed.x, seed.y).is_none() {
            return 0;
        }
        render::flood_fill(&mut self.fb, seed, color)
    }

    /// Recolor the border around `seed`, matched with the configured
    /// similarity threshold.
    pub fn highlight(&mut self, seed: Point, color: Color) -> Vec<Point> {
        render::highlight(&mut self.fb, seed, color, self.config.similarity_threshold)
    }

    fn draw_marker(&mut self, point: Point) {
        render::draw_point(
            &mut self.fb,
            point,
            self.config.point_color,
            self.config.marker_thickness,
        );
    }
}
