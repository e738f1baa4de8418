//! Rastrum engine: a CPU emulation of a GLSL-style rasterization pipeline.
//!
//! Vertex and fragment shaders are ordinary Rust closures working on a
//! [`ShaderBindings`] surface, so shader logic can be run, tested and
//! golden-imaged without a GPU.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`attribute`] | `AttributeKind`, `AttributeValue`, `AttributeDescriptor`, `AttributeSet` |
//! | [`shader`] | `ShaderBindings`, `Binding`, `Transforms` |
//! | [`framebuffer`] | `Framebuffer`, PPM export |
//! | [`raster`] | `Rasterizer`, `VertexBuffer`, `RenderStats` |
//! | [`config`] | `RasterConfig`, `DegenerateTriangles` |
//! | [`logging`] | `init_logging` |
//!
//! Vector and matrix math is [`glam`].

pub mod attribute;
pub mod config;
pub mod error;
pub mod framebuffer;
pub mod logging;
pub mod raster;
pub mod shader;

pub use config::{DegenerateTriangles, RasterConfig};
pub use error::{RasterError, Result};
pub use framebuffer::Framebuffer;
pub use raster::{Rasterizer, RenderStats, VertexBuffer};
pub use shader::{Binding, ShaderBindings, Transforms};

pub use glam;
