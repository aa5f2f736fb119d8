//! BGRA pixel buffer shared by every rasterizer.
//!
//! The buffer is the engine's only mutable state. Writes are direct
//! overwrites (no alpha compositing) and silently ignore coordinates outside
//! the buffer. Rows are padded to a 64-byte stride so the bulk operations can
//! hand whole rows to trueno's SIMD vectors.

use crate::color::Color;
use crate::error::{Error, Result};
use tracing::debug;
use trueno::{Backend, Vector};

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned BGRA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// BGRA pixels in row-major order.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
    /// Color sampled at the last flood-fill seed.
    base: Color,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to opaque white.
    ///
    /// The base color starts out white as well.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 650).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 650);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let size = stride * (height as usize);

        let mut pixels = Vec::with_capacity(size + SIMD_ALIGNMENT);
        pixels.resize(size, 0);

        let mut fb = Self {
            width,
            height,
            pixels,
            stride,
            base: Color::WHITE,
        };
        fb.clear(Color::WHITE);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data, stride padding included.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// `(x, y)` lies inside the buffer.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Fill the whole buffer with one color.
    ///
    /// Rows are filled from a 64-byte (16 pixel) pattern so the copy
    /// vectorizes.
    pub fn clear(&mut self, color: Color) {
        let bgra = color.to_bgra();

        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for chunk in p.chunks_exact_mut(4) {
                chunk.copy_from_slice(&bgra);
            }
            p
        };

        let row_bytes = (self.width as usize) * 4;
        for y in 0..self.height as usize {
            let row_start = y * self.stride;
            let row = &mut self.pixels[row_start..row_start + row_bytes];

            let mut chunks = row.chunks_exact_mut(64);
            for chunk in &mut chunks {
                chunk.copy_from_slice(&pattern);
            }
            for pixel in chunks.into_remainder().chunks_exact_mut(4) {
                pixel.copy_from_slice(&bgra);
            }
        }
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_bgra(x, y).map(Color::from_bgra)
    }

    /// Get the packed `[b, g, r, a]` bytes at a pixel coordinate.
    #[must_use]
    pub fn get_bgra(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Overwrite one pixel. Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set_bgra(x, y, color.to_bgra());
    }

    /// Overwrite one pixel with packed bytes.
    pub fn set_bgra(&mut self, x: i32, y: i32, bgra: [u8; 4]) {
        if !self.contains(x, y) {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&bgra);
    }

    /// Overwrite the half-open run `[x_start, x_end)` of row `y`.
    ///
    /// The run is clipped to the buffer; an empty or fully clipped run is a
    /// no-op.
    pub fn fill_span(&mut self, x_start: i32, x_end: i32, y: i32, color: Color) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let x1 = x_start.max(0);
        let x2 = x_end.min(self.width as i32);
        if x1 >= x2 {
            return;
        }

        let bgra = color.to_bgra();
        let start = self.pixel_index(x1, y);
        let end = self.pixel_index(x2, y);
        for pixel in self.pixels[start..end].chunks_exact_mut(4) {
            pixel.copy_from_slice(&bgra);
        }
    }

    /// Color that flood fill is allowed to repaint.
    #[must_use]
    pub const fn base_color(&self) -> Color {
        self.base
    }

    /// Set the flood-fill base color directly.
    pub fn set_base_color(&mut self, color: Color) {
        self.base = color;
    }

    /// Record the color under `(x, y)` as the flood-fill base color.
    ///
    /// Returns the sampled color, or `None` (leaving the base unchanged) when
    /// the point is outside the buffer.
    pub fn sample_base(&mut self, x: i32, y: i32) -> Option<Color> {
        let color = self.get_pixel(x, y)?;
        self.base = color;
        Some(color)
    }

    /// Per-pixel similarity against `reference`, row-major without padding.
    ///
    /// Entry `y * width + x` is `true` when the pixel's Euclidean RGB
    /// distance to `reference` is at most `threshold`. Squared distances are
    /// computed a row at a time with trueno vectors.
    #[must_use]
    pub fn similarity_mask(&self, reference: Color, threshold: f64) -> Vec<bool> {
        let width = self.width as usize;
        let limit = (threshold * threshold) as f32;
        let mut mask = Vec::with_capacity(self.pixel_count());

        for y in 0..self.height {
            let Some(row) = self.row(y) else { continue };

            let delta = |channel: usize, target: f64| {
                let target = target as f32;
                Vector::from_vec(
                    row.chunks_exact(4)
                        .map(|px| f32::from(px[channel]) - target)
                        .collect(),
                )
            };
            let db = delta(0, reference.blue);
            let dg = delta(1, reference.green);
            let dr = delta(2, reference.red);

            let squared = db
                .mul(&db)
                .and_then(|b2| dg.mul(&dg).and_then(|g2| b2.add(&g2)))
                .and_then(|bg| dr.mul(&dr).and_then(|r2| bg.add(&r2)));

            match squared {
                Ok(sum) => mask.extend(sum.as_slice().iter().map(|&d| d <= limit)),
                // scalar path if the vector backend rejects the row
                Err(_) => mask.extend((0..width).map(|x| {
                    Color::from_bgra([row[x * 4], row[x * 4 + 1], row[x * 4 + 2], row[x * 4 + 3]])
                        .is_similar(reference, threshold)
                })),
            }
        }

        debug!(
            backend = ?Backend::select_best(),
            matched = mask.iter().filter(|&&m| m).count(),
            "similarity mask computed"
        );
        mask
    }

    /// Byte index of a pixel; callers guarantee `(x, y)` is in bounds.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Tightly packed BGRA copy without stride padding, for blitting to a
    /// display surface.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}
