//! Color type used by the rasterizers.
//!
//! Channels are stored as unclamped `f64` in blue, green, red, alpha order so
//! that interpolation can subtract, add and scale colors freely. Clamping and
//! rounding happen only when a color is written to a [`Framebuffer`].
//!
//! [`Framebuffer`]: crate::framebuffer::Framebuffer

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Default radius for [`Color::is_similar`], in RGB units.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 50.0;

/// BGRA color with real-valued channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Blue channel.
    pub blue: f64,
    /// Green channel.
    pub green: f64,
    /// Red channel.
    pub red: f64,
    /// Alpha channel (255 = fully opaque).
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    255.0
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::bgr(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::bgr(255.0, 255.0, 255.0);
    /// Opaque red.
    pub const RED: Self = Self::bgr(0.0, 0.0, 255.0);
    /// Opaque green.
    pub const GREEN: Self = Self::bgr(0.0, 255.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::bgr(255.0, 0.0, 0.0);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn bgra(blue: f64, green: f64, red: f64, alpha: f64) -> Self {
        Self { blue, green, red, alpha }
    }

    /// Create an opaque color in buffer channel order.
    #[must_use]
    pub const fn bgr(blue: f64, green: f64, red: f64) -> Self {
        Self::bgra(blue, green, red, 255.0)
    }

    /// Create an opaque color from conventional RGB order.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::bgr(blue, green, red)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::bgra(self.blue, self.green, self.red, alpha)
    }

    /// Channel-wise `self - other` on B, G and R. Alpha is kept from `self`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self::bgra(
            self.blue - other.blue,
            self.green - other.green,
            self.red - other.red,
            self.alpha,
        )
    }

    /// Channel-wise `self + other` on B, G and R. Alpha is kept from `self`.
    #[must_use]
    pub fn sum(self, other: Self) -> Self {
        Self::bgra(
            self.blue + other.blue,
            self.green + other.green,
            self.red + other.red,
            self.alpha,
        )
    }

    /// Scale B, G and R by `k`. Alpha is unchanged.
    #[must_use]
    pub fn scaled(self, k: f64) -> Self {
        Self::bgra(self.blue * k, self.green * k, self.red * k, self.alpha)
    }

    /// Euclidean RGB distance to `other` is at most `threshold`.
    ///
    /// Alpha does not take part in the comparison.
    #[must_use]
    pub fn is_similar(self, other: Self, threshold: f64) -> bool {
        let r = self.red - other.red;
        let g = self.green - other.green;
        let b = self.blue - other.blue;
        (r * r + g * g + b * b).sqrt() <= threshold
    }

    /// Clamp to [0, 255], round, and pack as `[b, g, r, a]`.
    #[must_use]
    pub fn to_bgra(self) -> [u8; 4] {
        [
            channel_to_byte(self.blue),
            channel_to_byte(self.green),
            channel_to_byte(self.red),
            channel_to_byte(self.alpha),
        ]
    }

    /// Create from packed `[b, g, r, a]` bytes.
    #[must_use]
    pub fn from_bgra(bytes: [u8; 4]) -> Self {
        Self::bgra(
            f64::from(bytes[0]),
            f64::from(bytes[1]),
            f64::from(bytes[2]),
            f64::from(bytes[3]),
        )
    }

    /// The color exactly as it reads back after being written to a buffer.
    #[must_use]
    pub fn quantized(self) -> Self {
        Self::from_bgra(self.to_bgra())
    }
}

fn channel_to_byte(v: f64) -> u8 {
    // NaN fails both comparisons and lands on 0
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v.round() as u8
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.sum(rhs)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scaled(k)
    }
}
