use crate::error::{RasterError, Result};
use crate::shader::{Binding, ShaderBindings, SlotId};

use super::{AttributeKind, AttributeType, AttributeValue};

/// One typed attribute: where it lives on the [`ShaderBindings`] and a
/// snapshot of its last captured value.
///
/// The kind and slot are fixed at construction. The snapshot is rewritten
/// by [`capture`](Self::capture) and [`blend`](Self::blend).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDescriptor {
    slot: SlotId,
    value: AttributeValue,
}

impl AttributeDescriptor {
    pub fn new<T: AttributeType>(binding: Binding<T>) -> Self {
        Self {
            slot: binding.slot(),
            value: AttributeValue::zeroed(T::KIND),
        }
    }

    #[inline]
    pub fn kind(&self) -> AttributeKind {
        self.value.kind()
    }

    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Last captured or blended value.
    #[inline]
    pub fn value(&self) -> AttributeValue {
        self.value
    }

    /// Packed byte width of this attribute.
    #[inline]
    pub fn size(&self) -> usize {
        self.kind().size()
    }

    /// Decodes one value from the start of `bytes` straight into the binding.
    pub fn load_from_buffer(&self, bytes: &[u8], bindings: &mut ShaderBindings) -> Result<()> {
        let value = AttributeValue::read(self.kind(), bytes)?;
        bindings.set_value(self.slot, value)
    }

    /// Copies the binding's current value into the snapshot.
    pub fn capture(&mut self, bindings: &ShaderBindings) -> Result<()> {
        let value = bindings.value(self.slot)?;
        if value.kind() != self.kind() {
            return Err(RasterError::KindMismatch {
                position: self.slot.index(),
                left: self.kind(),
                right: value.kind(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Writes the snapshot back into the binding.
    pub fn restore(&self, bindings: &mut ShaderBindings) -> Result<()> {
        bindings.set_value(self.slot, self.value)
    }

    /// New descriptor on the same slot whose snapshot is `mix(self, other, t)`.
    pub fn blend(&self, other: &AttributeDescriptor, t: f32) -> Result<AttributeDescriptor> {
        if self.kind() != other.kind() {
            return Err(RasterError::KindMismatch {
                position: self.slot.index(),
                left: self.kind(),
                right: other.kind(),
            });
        }
        Ok(AttributeDescriptor {
            slot: self.slot,
            value: self.value.mix(&other.value, t)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec2, Vec4};

    #[test]
    fn load_writes_binding() {
        let mut b = ShaderBindings::new();
        let color = b.declare::<Vec4>("a_color0");
        let d = AttributeDescriptor::new(color);

        let floats = [0.1f32, 0.2, 0.3, 0.4];
        d.load_from_buffer(bytemuck::cast_slice(&floats), &mut b).unwrap();
        assert_eq!(b.get(color), Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(d.size(), 16);
    }

    #[test]
    fn capture_then_restore_survives_overwrite() {
        let mut b = ShaderBindings::new();
        let uv = b.declare::<Vec2>("v_texcoord0");
        let mut d = AttributeDescriptor::new(uv);

        b.set(uv, Vec2::new(0.5, 0.5));
        d.capture(&b).unwrap();
        b.set(uv, Vec2::ZERO);
        d.restore(&mut b).unwrap();

        assert_eq!(b.get(uv), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn blend_interpolates_snapshots() {
        let mut b = ShaderBindings::new();
        let w = b.declare::<f32>("v_weight");
        let mut lo = AttributeDescriptor::new(w);
        let mut hi = AttributeDescriptor::new(w);

        b.set(w, 10.0);
        lo.capture(&b).unwrap();
        b.set(w, 20.0);
        hi.capture(&b).unwrap();

        let mid = lo.blend(&hi, 0.25).unwrap();
        assert_eq!(mid.value(), AttributeValue::Float(12.5));
        assert_eq!(mid.slot(), w.slot());
    }

    #[test]
    fn blend_kind_mismatch_fails() {
        let mut b = ShaderBindings::new();
        let f = AttributeDescriptor::new(b.declare::<f32>("a"));
        let v = AttributeDescriptor::new(b.declare::<Vec2>("b"));
        assert!(matches!(f.blend(&v, 0.5), Err(RasterError::KindMismatch { .. })));
    }

    #[test]
    fn blend_matrix_fails() {
        let mut b = ShaderBindings::new();
        let m = AttributeDescriptor::new(b.declare::<Mat4>("a_model"));
        assert!(matches!(m.blend(&m, 0.5), Err(RasterError::UnsupportedBlend { .. })));
    }

    #[test]
    fn restore_on_foreign_bindings_fails() {
        let mut b = ShaderBindings::new();
        let d = AttributeDescriptor::new(b.declare::<f32>("a"));
        let mut empty = ShaderBindings::new();
        assert!(matches!(d.restore(&mut empty), Err(RasterError::UnknownBinding { slot: 0 })));
    }
}
