use thiserror::Error;

use crate::attribute::AttributeKind;

/// Errors reported by the attribute system, the rasterizer and the exporter.
///
/// Every variant aborts the operation that produced it. Pixels written by a
/// render call before the failing triangle are kept.
#[derive(Debug, Error)]
pub enum RasterError {
    // ── configuration ─────────────────────────────────────────────────────
    #[error("index buffer is empty")]
    EmptyIndexBuffer,

    #[error("vertex buffer is empty")]
    EmptyVertexBuffer,

    #[error("input attribute layout has zero size")]
    EmptyInputLayout,

    #[error("index buffer length {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    #[error("vertex buffer holds {actual} bytes, layout needs {needed}")]
    VertexBufferTooSmall { needed: usize, actual: usize },

    #[error("output varying `{name}` is a mat4; matrix varyings cannot be interpolated")]
    MatrixVarying { name: String },

    // ── data ──────────────────────────────────────────────────────────────
    #[error("triangle {triangle} references vertex {index}, buffer has {vertex_count}")]
    VertexIndexOutOfRange {
        triangle: usize,
        index: u16,
        vertex_count: usize,
    },

    // ── usage ─────────────────────────────────────────────────────────────
    #[error("attribute sets differ in length ({left} vs {right})")]
    LayoutMismatch { left: usize, right: usize },

    #[error("attribute {position} differs in kind ({left} vs {right})")]
    KindMismatch {
        position: usize,
        left: AttributeKind,
        right: AttributeKind,
    },

    #[error("{kind} attributes cannot be blended")]
    UnsupportedBlend { kind: AttributeKind },

    #[error("binding slot {slot} is not declared on these shader bindings")]
    UnknownBinding { slot: usize },

    #[error("buffer holds {actual} bytes, attribute needs {needed}")]
    BufferTooShort { needed: usize, actual: usize },

    // ── invariants ────────────────────────────────────────────────────────
    #[error("triangle {triangle} is degenerate (edge lengths {u_length}, {v_length})")]
    DegenerateTriangle {
        triangle: usize,
        u_length: f32,
        v_length: f32,
    },

    #[error("unknown attribute type tag {tag}")]
    UnknownAttributeTag { tag: u8 },

    // ── export ────────────────────────────────────────────────────────────
    #[error("failed to write image")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = RasterError> = std::result::Result<T, E>;
