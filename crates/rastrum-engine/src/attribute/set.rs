use crate::error::{RasterError, Result};
use crate::shader::ShaderBindings;

use super::AttributeDescriptor;

/// Ordered attribute layout. Order defines the packed byte layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    attributes: Vec<AttributeDescriptor>,
}

impl AttributeSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, attribute: AttributeDescriptor) {
        self.attributes.push(attribute);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.iter()
    }

    /// Packed size of one element (vertex stride / varying blob size).
    pub fn total_size(&self) -> usize {
        self.attributes.iter().map(AttributeDescriptor::size).sum()
    }

    /// Loads every attribute from consecutive bytes of `bytes`.
    pub fn load_from_buffer(&self, bytes: &[u8], bindings: &mut ShaderBindings) -> Result<()> {
        let needed = self.total_size();
        if bytes.len() < needed {
            return Err(RasterError::BufferTooShort {
                needed,
                actual: bytes.len(),
            });
        }

        let mut offset = 0;
        for attribute in &self.attributes {
            attribute.load_from_buffer(&bytes[offset..], bindings)?;
            offset += attribute.size();
        }
        Ok(())
    }

    pub fn capture_all(&mut self, bindings: &ShaderBindings) -> Result<()> {
        self.attributes.iter_mut().try_for_each(|a| a.capture(bindings))
    }

    pub fn restore_all(&self, bindings: &mut ShaderBindings) -> Result<()> {
        self.attributes.iter().try_for_each(|a| a.restore(bindings))
    }

    /// Blends position-wise with `other`. Both sets must share a layout.
    pub fn blend(&self, other: &AttributeSet, t: f32) -> Result<AttributeSet> {
        if self.len() != other.len() {
            return Err(RasterError::LayoutMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let attributes = self
            .attributes
            .iter()
            .zip(&other.attributes)
            .enumerate()
            .map(|(position, (a, b))| {
                a.blend(b, t).map_err(|err| match err {
                    RasterError::KindMismatch { left, right, .. } => RasterError::KindMismatch {
                        position,
                        left,
                        right,
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AttributeSet { attributes })
    }
}

impl FromIterator<AttributeDescriptor> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeDescriptor>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;
    use glam::{Vec2, Vec3, Vec4};

    #[repr(C)]
    #[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
    struct PosColor {
        position: [f32; 3],
        color: [f32; 4],
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn total_size_sums_members() {
        let mut b = ShaderBindings::new();
        let set: AttributeSet = [
            AttributeDescriptor::new(b.declare::<Vec3>("a_position")),
            AttributeDescriptor::new(b.declare::<Vec4>("a_color0")),
            AttributeDescriptor::new(b.declare::<f32>("a_weight")),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.total_size(), 12 + 16 + 4);
        assert_eq!(AttributeSet::new().total_size(), 0);
    }

    // ── load ──────────────────────────────────────────────────────────────

    #[test]
    fn load_walks_members_in_order() {
        let mut b = ShaderBindings::new();
        let pos = b.declare::<Vec3>("a_position");
        let color = b.declare::<Vec4>("a_color0");
        let set: AttributeSet = [AttributeDescriptor::new(pos), AttributeDescriptor::new(color)]
            .into_iter()
            .collect();

        let vertex = PosColor {
            position: [1.0, 2.0, 3.0],
            color: [0.0, 0.5, 1.0, 1.0],
        };
        set.load_from_buffer(bytemuck::bytes_of(&vertex), &mut b).unwrap();

        assert_eq!(b.get(pos), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.get(color), Vec4::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn load_short_buffer_fails_before_writing() {
        let mut b = ShaderBindings::new();
        let pos = b.declare::<Vec3>("a_position");
        let color = b.declare::<Vec4>("a_color0");
        let set: AttributeSet = [AttributeDescriptor::new(pos), AttributeDescriptor::new(color)]
            .into_iter()
            .collect();

        let err = set.load_from_buffer(&[1u8; 20], &mut b).unwrap_err();
        assert!(matches!(err, RasterError::BufferTooShort { needed: 28, actual: 20 }));
        assert_eq!(b.get(pos), Vec3::ZERO);
    }

    // ── capture / restore ─────────────────────────────────────────────────

    #[test]
    fn capture_all_restore_all() {
        let mut b = ShaderBindings::new();
        let c = b.declare::<Vec4>("v_color0");
        let uv = b.declare::<Vec2>("v_texcoord0");
        let mut set: AttributeSet = [AttributeDescriptor::new(c), AttributeDescriptor::new(uv)]
            .into_iter()
            .collect();

        b.set(c, Vec4::ONE);
        b.set(uv, Vec2::new(0.5, 0.25));
        set.capture_all(&b).unwrap();

        b.set(c, Vec4::ZERO);
        b.set(uv, Vec2::ZERO);
        set.restore_all(&mut b).unwrap();

        assert_eq!(b.get(c), Vec4::ONE);
        assert_eq!(b.get(uv), Vec2::new(0.5, 0.25));
    }

    // ── blend ─────────────────────────────────────────────────────────────

    #[test]
    fn blend_each_member_independently() {
        let mut b = ShaderBindings::new();
        let w = b.declare::<f32>("v_weight");
        let uv = b.declare::<Vec2>("v_texcoord0");
        let layout: AttributeSet = [AttributeDescriptor::new(w), AttributeDescriptor::new(uv)]
            .into_iter()
            .collect();

        let mut a = layout.clone();
        b.set(w, 0.0);
        b.set(uv, Vec2::new(0.0, 1.0));
        a.capture_all(&b).unwrap();

        let mut c = layout.clone();
        b.set(w, 8.0);
        b.set(uv, Vec2::new(1.0, 0.0));
        c.capture_all(&b).unwrap();

        let mid = a.blend(&c, 0.5).unwrap();
        let values: Vec<AttributeValue> = mid.iter().map(|d| d.value()).collect();
        assert_eq!(
            values,
            [AttributeValue::Float(4.0), AttributeValue::Vec2(Vec2::new(0.5, 0.5))]
        );
    }

    #[test]
    fn blend_length_mismatch_is_detected() {
        let mut b = ShaderBindings::new();
        let one: AttributeSet = [AttributeDescriptor::new(b.declare::<f32>("a"))]
            .into_iter()
            .collect();
        let two: AttributeSet = [
            AttributeDescriptor::new(b.declare::<f32>("b")),
            AttributeDescriptor::new(b.declare::<f32>("c")),
        ]
        .into_iter()
        .collect();

        let err = one.blend(&two, 0.5).unwrap_err();
        assert!(matches!(err, RasterError::LayoutMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn blend_kind_mismatch_reports_position() {
        let mut b = ShaderBindings::new();
        let left: AttributeSet = [
            AttributeDescriptor::new(b.declare::<f32>("a")),
            AttributeDescriptor::new(b.declare::<Vec3>("b")),
        ]
        .into_iter()
        .collect();
        let right: AttributeSet = [
            AttributeDescriptor::new(b.declare::<f32>("c")),
            AttributeDescriptor::new(b.declare::<Vec4>("d")),
        ]
        .into_iter()
        .collect();

        let err = left.blend(&right, 0.5).unwrap_err();
        assert!(matches!(err, RasterError::KindMismatch { position: 1, .. }));
    }

    #[test]
    fn blend_empty_sets() {
        let empty = AttributeSet::new();
        assert!(empty.blend(&AttributeSet::new(), 0.3).unwrap().is_empty());
    }
}
