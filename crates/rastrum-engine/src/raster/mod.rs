//! The render call: vertex stage, triangle setup, coverage, depth test,
//! fragment stage.
//!
//! Logical coordinates come straight from `clip_position.xy` (no perspective
//! divide, no clipping). Covered pixels are found by testing every integer
//! point of the triangle's bounding box. Depth and varyings are interpolated
//! affinely in screen space.

mod buffers;
mod rasterizer;
mod triangle;

pub use buffers::VertexBuffer;
pub use rasterizer::{Rasterizer, RenderStats, to_rgba8};
