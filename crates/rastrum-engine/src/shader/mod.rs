//! Shader binding surface.
//!
//! Vertex and fragment shaders are plain closures taking `&mut ShaderBindings`.
//! They read declared inputs through typed [`Binding`] handles and write
//! `clip_position` (vertex stage) or `frag_color` (fragment stage).
//!
//! ```
//! use glam::{Vec3, Vec4};
//! use rastrum_engine::shader::ShaderBindings;
//!
//! let mut bindings = ShaderBindings::new();
//! let a_position = bindings.declare::<Vec3>("a_position");
//!
//! let mut vertex = move |io: &mut ShaderBindings| {
//!     let p = io.get(a_position);
//!     io.clip_position = io.transforms.model_view_proj * p.extend(1.0);
//! };
//!
//! bindings.set(a_position, Vec3::new(1.0, 2.0, 0.0));
//! vertex(&mut bindings);
//! assert_eq!(bindings.clip_position, Vec4::new(1.0, 2.0, 0.0, 1.0));
//! ```

mod bindings;
mod transforms;

pub use bindings::{Binding, ShaderBindings, SlotId};
pub use transforms::Transforms;
