use bytemuck::Pod;

/// Borrowed packed vertex data.
///
/// The per-vertex stride is not stored here; it comes from the input
/// [`AttributeSet`](crate::attribute::AttributeSet) at render time.
#[derive(Debug, Copy, Clone)]
pub struct VertexBuffer<'a> {
    bytes: &'a [u8],
    count: usize,
}

impl<'a> VertexBuffer<'a> {
    pub fn new(bytes: &'a [u8], count: usize) -> Self {
        Self { bytes, count }
    }

    /// One vertex per element of `vertices`.
    pub fn from_slice<T: Pod>(vertices: &'a [T]) -> Self {
        Self {
            bytes: bytemuck::cast_slice(vertices),
            count: vertices.len(),
        }
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.bytes.is_empty()
    }

    /// Bytes of vertex `index` given `stride`. Caller has checked the range.
    #[inline]
    pub(crate) fn vertex(&self, index: usize, stride: usize) -> &'a [u8] {
        let start = stride * index;
        &self.bytes[start..start + stride]
    }
}
