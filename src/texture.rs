//! Source images for textured flood fill.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// Immutable BGRA raster sampled with wrap-around addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    /// Tightly packed BGRA pixels, row-major.
    pixels: Vec<u8>,
}

impl Texture {
    /// Wrap tightly packed BGRA bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `pixels` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(Error::TextureDataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Snapshot the current contents of a framebuffer.
    #[must_use]
    pub fn from_framebuffer(fb: &Framebuffer) -> Self {
        Self {
            width: fb.width(),
            height: fb.height(),
            pixels: fb.to_compact_pixels(),
        }
    }

    /// Decode an 8-bit RGB or RGBA PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails or the image uses another color
    /// type or bit depth.
    pub fn from_png<R: Read>(reader: R) -> Result<Self> {
        let decoder = png::Decoder::new(reader);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        if info.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedPngFormat(format!(
                "bit depth {:?}",
                info.bit_depth
            )));
        }

        let channels = match info.color_type {
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            other => {
                return Err(Error::UnsupportedPngFormat(format!("color type {other:?}")));
            }
        };

        let width = info.width as usize;
        let mut pixels = Vec::with_capacity(width * (info.height as usize) * 4);
        for row in buf.chunks_exact(info.line_size).take(info.height as usize) {
            for px in row[..width * channels].chunks_exact(channels) {
                let alpha = if channels == 4 { px[3] } else { 255 };
                pixels.extend_from_slice(&[px[2], px[1], px[0], alpha]);
            }
        }

        Self::new(info.width, info.height, pixels)
    }

    /// Decode a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_png(BufReader::new(file))
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Pixel at `(x, y)` with both coordinates wrapped modulo the image size.
    #[must_use]
    pub fn sample_wrapped(&self, x: i32, y: i32) -> [u8; 4] {
        let wx = i64::from(x).rem_euclid(i64::from(self.width)) as usize;
        let wy = i64::from(y).rem_euclid(i64::from(self.height)) as usize;
        let idx = (wy * (self.width as usize) + wx) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}
