//! Rasterization into a [`Framebuffer`](crate::framebuffer::Framebuffer).
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer, gap-free, non-antialiased
//! - **Wu's Anti-aliased Line**: coverage split across adjacent pixel pairs
//! - **Shaded Triangles**: scanline and barycentric linear color interpolation
//! - **Flood Fill**: scanline runs over an explicit work stack, solid or textured
//! - **Border Trace**: 8-connected near-black component search
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod fill;
mod line;
mod primitives;
mod triangle;

pub use fill::{fill_texture, flood_fill, highlight, trace_border};
pub use line::{draw_line, draw_line_bresenham, draw_line_wu, LineAlgorithm};
pub use primitives::{draw_point, draw_polygon, Drawable};
pub use triangle::{
    draw_triangle, draw_triangle_barycentric, draw_triangle_scanline, is_point_in_triangle,
    order_vertices, TriangleShading, Vertex,
};
