//! # Trueno-Raster
//!
//! Software rasterizer and computational-geometry engine over an explicit
//! BGRA pixel buffer.
//!
//! Every algorithm reads and writes a single [`Framebuffer`] directly; there
//! is no display list. Callers blit the buffer wherever it needs to go after
//! each mutation.
//!
//! ## Features
//!
//! - **Geometry**: points, segments with intersection, polygons with
//!   crossing-parity containment, Graham-scan convex hulls
//! - **Lines**: integer Bresenham and anti-aliased Wu rasterization
//! - **Triangles**: scanline and barycentric vertex-color shading
//! - **Regions**: solid and textured flood fill, near-black border tracing
//! - **Sessions**: YAML-configured point editing with hull construction
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! let square = [Point::new(8, 8), Point::new(56, 8), Point::new(56, 56), Point::new(8, 56)];
//! draw_polygon(&mut fb, &square, Color::BLACK);
//!
//! fb.sample_base(32, 32);
//! let painted = flood_fill(&mut fb, Point::new(32, 32), Color::RED);
//! assert_eq!(painted, 47 * 47);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Graham, R. L. (1972). "An Efficient Algorithm for Determining the Convex
//!   Hull of a Finite Planar Set."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// BGRA colors with real-valued channels.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, line segments).
pub mod geometry;

/// Polygons, directed edges and containment.
pub mod polygon;

/// Convex hulls.
pub mod hull;

/// Source images for textured fills.
pub mod texture;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

// ============================================================================
// Session Modules
// ============================================================================

/// YAML configuration.
pub mod config;

/// Point-editing session.
pub mod sketch;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, DEFAULT_SIMILARITY_THRESHOLD};
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point};
    pub use crate::hull::Hull;
    pub use crate::polygon::{Direction, Edge, Polygon};
    pub use crate::render::{
        draw_line, draw_point, draw_polygon, draw_triangle, fill_texture, flood_fill, highlight,
        trace_border, Drawable, LineAlgorithm, TriangleShading,
    };
    pub use crate::sketch::Sketch;
    pub use crate::texture::Texture;
}
