//! Vertex attributes and varyings.
//!
//! An [`AttributeSet`] describes a packed layout: the vertex buffer stride on
//! the input side, the varying blob carried from the vertex to the fragment
//! stage on the output side. Each [`AttributeDescriptor`] moves one value
//! between raw bytes, the shader bindings and its own snapshot.

mod descriptor;
mod kind;
mod set;

pub use descriptor::AttributeDescriptor;
pub use kind::{AttributeKind, AttributeType, AttributeValue, mix};
pub use set::AttributeSet;
