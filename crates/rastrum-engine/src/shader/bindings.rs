use core::fmt;
use core::marker::PhantomData;

use glam::Vec4;

use crate::attribute::{AttributeKind, AttributeType, AttributeValue};
use crate::error::{RasterError, Result};

use super::Transforms;

/// Untyped index of a declared binding slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Typed handle to a slot declared on a [`ShaderBindings`].
///
/// Handles are plain indices: they stay valid for the bindings that issued
/// them and are meaningless on any other instance.
pub struct Binding<T> {
    slot: SlotId,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Binding<T> {
    #[inline]
    pub fn slot(self) -> SlotId {
        self.slot
    }
}

impl<T: AttributeType> Binding<T> {
    #[inline]
    pub fn kind(self) -> AttributeKind {
        T::KIND
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Binding<T> {}

impl<T> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for Binding<T> {}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.slot.0).finish()
    }
}

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    value: AttributeValue,
}

/// The variables a vertex or fragment shader reads and writes.
///
/// A render call owns these exclusively for its duration: it loads vertex
/// inputs and interpolated varyings into the declared slots, runs the shader
/// callback, then reads `clip_position` or `frag_color` back out.
#[derive(Debug, Clone, Default)]
pub struct ShaderBindings {
    slots: Vec<Slot>,

    /// Vertex stage output (`gl_Position`). Only `x`, `y`, `z` are used.
    pub clip_position: Vec4,

    /// Fragment stage output (`gl_FragColor`), nominally `0..=1` per channel.
    pub frag_color: Vec4,

    /// Uniform matrices readable by both stages.
    pub transforms: Transforms,
}

impl ShaderBindings {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a named slot of type `T`, zero-initialized.
    ///
    /// Names are labels for diagnostics; declaring the same name twice yields
    /// two independent slots.
    pub fn declare<T: AttributeType>(&mut self, name: impl Into<String>) -> Binding<T> {
        let slot = SlotId(self.slots.len());
        self.slots.push(Slot {
            name: name.into(),
            value: AttributeValue::zeroed(T::KIND),
        });
        Binding { slot, _ty: PhantomData }
    }

    /// Reads the current value of `binding`.
    ///
    /// Returns `T::default()` for a handle that was not issued by `self`.
    pub fn get<T: AttributeType>(&self, binding: Binding<T>) -> T {
        self.slots
            .get(binding.slot.0)
            .and_then(|slot| T::from_value(slot.value))
            .unwrap_or_default()
    }

    /// Writes `value` into `binding`. Foreign handles are ignored.
    pub fn set<T: AttributeType>(&mut self, binding: Binding<T>, value: T) {
        debug_assert!(
            binding.slot.0 < self.slots.len(),
            "ShaderBindings::set: binding {} was not declared here",
            binding.slot.0
        );
        if let Some(slot) = self.slots.get_mut(binding.slot.0) {
            slot.value = value.into_value();
        }
    }

    /// Declared name of `binding`, if it belongs to `self`.
    pub fn name<T>(&self, binding: Binding<T>) -> Option<&str> {
        self.slot_name(binding.slot)
    }

    pub fn slot_name(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(slot.0).map(|s| s.name.as_str())
    }

    /// First slot declared under `name`.
    pub fn find(&self, name: &str) -> Option<SlotId> {
        self.slots.iter().position(|s| s.name == name).map(SlotId)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Untyped read used by the attribute descriptors.
    pub fn value(&self, slot: SlotId) -> Result<AttributeValue> {
        self.slots
            .get(slot.0)
            .map(|s| s.value)
            .ok_or(RasterError::UnknownBinding { slot: slot.0 })
    }

    /// Untyped write used by the attribute descriptors.
    ///
    /// The value must keep the slot's declared kind.
    pub fn set_value(&mut self, slot: SlotId, value: AttributeValue) -> Result<()> {
        let entry = self
            .slots
            .get_mut(slot.0)
            .ok_or(RasterError::UnknownBinding { slot: slot.0 })?;

        if entry.value.kind() != value.kind() {
            return Err(RasterError::KindMismatch {
                position: slot.0,
                left: entry.value.kind(),
                right: value.kind(),
            });
        }

        entry.value = value;
        Ok(())
    }
}
