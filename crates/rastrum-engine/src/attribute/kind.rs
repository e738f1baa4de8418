use core::fmt;
use core::ops::{Add, Mul};

use bytemuck::Pod;
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::{RasterError, Result};

/// Semantic type of a vertex attribute or varying.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AttributeKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
}

impl AttributeKind {
    /// Byte width of one packed value of this kind.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            AttributeKind::Float => 4,
            AttributeKind::Vec2 => 8,
            AttributeKind::Vec3 => 12,
            AttributeKind::Vec4 => 16,
            AttributeKind::Mat4 => 64,
        }
    }

    /// Numeric tag, in declaration order.
    #[inline]
    pub const fn tag(self) -> u8 {
        match self {
            AttributeKind::Float => 0,
            AttributeKind::Vec2 => 1,
            AttributeKind::Vec3 => 2,
            AttributeKind::Vec4 => 3,
            AttributeKind::Mat4 => 4,
        }
    }

    /// Inverse of [`tag`](Self::tag). Unknown tags are reported, not guessed.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(AttributeKind::Float),
            1 => Ok(AttributeKind::Vec2),
            2 => Ok(AttributeKind::Vec3),
            3 => Ok(AttributeKind::Vec4),
            4 => Ok(AttributeKind::Mat4),
            _ => Err(RasterError::UnknownAttributeTag { tag }),
        }
    }

    #[inline]
    pub const fn is_blendable(self) -> bool {
        !matches!(self, AttributeKind::Mat4)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeKind::Float => "float",
            AttributeKind::Vec2 => "vec2",
            AttributeKind::Vec3 => "vec3",
            AttributeKind::Vec4 => "vec4",
            AttributeKind::Mat4 => "mat4",
        })
    }
}

/// A value of one of the [`AttributeKind`]s.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AttributeValue {
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl AttributeValue {
    /// Zero value of `kind` (identity for matrices).
    pub fn zeroed(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::Float => AttributeValue::Float(0.0),
            AttributeKind::Vec2 => AttributeValue::Vec2(Vec2::ZERO),
            AttributeKind::Vec3 => AttributeValue::Vec3(Vec3::ZERO),
            AttributeKind::Vec4 => AttributeValue::Vec4(Vec4::ZERO),
            AttributeKind::Mat4 => AttributeValue::Mat4(Mat4::IDENTITY),
        }
    }

    #[inline]
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Float(_) => AttributeKind::Float,
            AttributeValue::Vec2(_) => AttributeKind::Vec2,
            AttributeValue::Vec3(_) => AttributeKind::Vec3,
            AttributeValue::Vec4(_) => AttributeKind::Vec4,
            AttributeValue::Mat4(_) => AttributeKind::Mat4,
        }
    }

    /// Decodes a packed native-endian value of `kind` from the start of `bytes`.
    ///
    /// `bytes` may be longer than the value; it need not be aligned.
    pub fn read(kind: AttributeKind, bytes: &[u8]) -> Result<Self> {
        let needed = kind.size();
        let Some(raw) = bytes.get(..needed) else {
            return Err(RasterError::BufferTooShort {
                needed,
                actual: bytes.len(),
            });
        };

        Ok(match kind {
            AttributeKind::Float => AttributeValue::Float(bytemuck::pod_read_unaligned(raw)),
            AttributeKind::Vec2 => AttributeValue::Vec2(bytemuck::pod_read_unaligned(raw)),
            AttributeKind::Vec3 => AttributeValue::Vec3(bytemuck::pod_read_unaligned(raw)),
            AttributeKind::Vec4 => AttributeValue::Vec4(bytemuck::pod_read_unaligned(raw)),
            AttributeKind::Mat4 => AttributeValue::Mat4(bytemuck::pod_read_unaligned(raw)),
        })
    }

    /// Per-component `self * (1 - t) + other * t`.
    pub fn mix(&self, other: &AttributeValue, t: f32) -> Result<Self> {
        use AttributeValue as V;
        match (self, other) {
            (V::Float(a), V::Float(b)) => Ok(V::Float(mix(*a, *b, t))),
            (V::Vec2(a), V::Vec2(b)) => Ok(V::Vec2(mix(*a, *b, t))),
            (V::Vec3(a), V::Vec3(b)) => Ok(V::Vec3(mix(*a, *b, t))),
            (V::Vec4(a), V::Vec4(b)) => Ok(V::Vec4(mix(*a, *b, t))),
            (V::Mat4(_), V::Mat4(_)) => Err(RasterError::UnsupportedBlend {
                kind: AttributeKind::Mat4,
            }),
            (a, b) => Err(RasterError::KindMismatch {
                position: 0,
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }
}

/// GLSL `mix`. Exact at both ends, unlike `a + (b - a) * t`.
#[inline]
pub fn mix<T>(a: T, b: T, t: f32) -> T
where
    T: Mul<f32, Output = T> + Add<Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Rust types that can back a shader binding.
pub trait AttributeType: Pod + Default {
    const KIND: AttributeKind;

    fn into_value(self) -> AttributeValue;

    fn from_value(value: AttributeValue) -> Option<Self>;
}

macro_rules! attribute_type {
    ($ty:ty, $variant:ident) => {
        impl AttributeType for $ty {
            const KIND: AttributeKind = AttributeKind::$variant;

            #[inline]
            fn into_value(self) -> AttributeValue {
                AttributeValue::$variant(self)
            }

            #[inline]
            fn from_value(value: AttributeValue) -> Option<Self> {
                match value {
                    AttributeValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

attribute_type!(f32, Float);
attribute_type!(Vec2, Vec2);
attribute_type!(Vec3, Vec3);
attribute_type!(Vec4, Vec4);
attribute_type!(Mat4, Mat4);
