use glam::{Vec2, Vec4};

use crate::attribute::{AttributeDescriptor, AttributeSet, AttributeType, mix};
use crate::config::{DegenerateTriangles, RasterConfig};
use crate::error::{RasterError, Result};
use crate::framebuffer::Framebuffer;
use crate::shader::{Binding, ShaderBindings};

use super::buffers::VertexBuffer;
use super::triangle::{TriangleBasis, bounding_box, point_in_triangle};

/// Counters for one [`Rasterizer::render`] call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Triangles that reached the pixel loop.
    pub triangles: usize,
    /// Fragments that passed the depth test and were shaded.
    pub fragments: usize,
    /// Covered pixels that lost the depth test.
    pub depth_rejected: usize,
    /// Triangles dropped under [`DegenerateTriangles::Skip`].
    pub degenerate_skipped: usize,
}

/// Vertex stage result for one triangle corner.
#[derive(Debug, Clone)]
struct ShadedVertex {
    position: Vec4,
    varyings: AttributeSet,
}

/// CPU implementation of the vertex → raster → fragment pipeline.
///
/// Owns the render targets and both attribute layouts. Buffers, bindings and
/// shaders are borrowed per [`render`](Self::render) call.
///
/// ```
/// use glam::{Vec3, Vec4};
/// use rastrum_engine::{RasterConfig, Rasterizer, ShaderBindings, VertexBuffer};
///
/// let mut io = ShaderBindings::new();
/// let a_position = io.declare::<Vec3>("a_position");
///
/// let mut raster = Rasterizer::new(RasterConfig::with_size(8, 8));
/// raster.add_attribute(a_position);
///
/// let vertices: [[f32; 3]; 3] = [[-4.0, -4.0, 0.0], [3.0, -4.0, 0.0], [-4.0, 3.0, 0.0]];
/// let stats = raster
///     .render(
///         &mut io,
///         VertexBuffer::from_slice(&vertices),
///         &[0, 1, 2],
///         |io: &mut ShaderBindings| io.clip_position = io.get(a_position).extend(1.0),
///         |io: &mut ShaderBindings| io.frag_color = Vec4::ONE,
///     )
///     .unwrap();
///
/// assert!(stats.fragments > 0);
/// assert_eq!(raster.framebuffer().color(0, 0), Some([255, 255, 255, 255]));
/// ```
#[derive(Debug, Clone)]
pub struct Rasterizer {
    config: RasterConfig,
    framebuffer: Framebuffer,
    inputs: AttributeSet,
    outputs: AttributeSet,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        let framebuffer =
            Framebuffer::with_clear_depth(config.width, config.height, config.clear_depth);
        Self {
            config,
            framebuffer,
            inputs: AttributeSet::new(),
            outputs: AttributeSet::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    #[inline]
    pub fn inputs(&self) -> &AttributeSet {
        &self.inputs
    }

    #[inline]
    pub fn outputs(&self) -> &AttributeSet {
        &self.outputs
    }

    /// Appends a vertex input. Declaration order is the vertex buffer layout.
    pub fn add_attribute<T: AttributeType>(&mut self, binding: Binding<T>) -> &mut Self {
        self.inputs.push(AttributeDescriptor::new(binding));
        self
    }

    /// Appends an output varying, interpolated between vertex and fragment stage.
    ///
    /// `mat4` varyings have no interpolation rule and are rejected here.
    pub fn add_output_attribute<T: AttributeType>(
        &mut self,
        bindings: &ShaderBindings,
        binding: Binding<T>,
    ) -> Result<&mut Self> {
        if !T::KIND.is_blendable() {
            let name = bindings.name(binding).unwrap_or("<undeclared>").to_string();
            return Err(RasterError::MatrixVarying { name });
        }
        self.outputs.push(AttributeDescriptor::new(binding));
        Ok(self)
    }

    /// Draws every triangle of `indices` in order.
    ///
    /// Fails before touching any pixel on configuration errors. A data error
    /// (index out of range, degenerate triangle under
    /// [`DegenerateTriangles::Reject`]) aborts mid-call; earlier triangles
    /// stay drawn.
    pub fn render<V, F>(
        &mut self,
        bindings: &mut ShaderBindings,
        vertices: VertexBuffer<'_>,
        indices: &[u16],
        mut vertex_shader: V,
        mut fragment_shader: F,
    ) -> Result<RenderStats>
    where
        V: FnMut(&mut ShaderBindings),
        F: FnMut(&mut ShaderBindings),
    {
        let stride = self.validate(&vertices, indices)?;
        let mut stats = RenderStats::default();

        for (triangle, corner_indices) in indices.chunks_exact(3).enumerate() {
            let corners = {
                let mut shade = |index| {
                    self.shade_vertex(
                        bindings,
                        &vertices,
                        stride,
                        triangle,
                        index,
                        &mut vertex_shader,
                    )
                };
                [shade(corner_indices[0])?, shade(corner_indices[1])?, shade(corner_indices[2])?]
            };

            let positions = [corners[0].position, corners[1].position, corners[2].position];
            let basis = match TriangleBasis::new(
                positions[0].truncate().truncate(),
                positions[1].truncate().truncate(),
                positions[2].truncate().truncate(),
            ) {
                Ok(basis) => basis,
                Err((u_length, v_length)) => match self.config.degenerate {
                    DegenerateTriangles::Reject => {
                        let err = RasterError::DegenerateTriangle {
                            triangle,
                            u_length,
                            v_length,
                        };
                        log::warn!("render aborted: {err}");
                        return Err(err);
                    }
                    DegenerateTriangles::Skip => {
                        log::warn!(
                            "skipping degenerate triangle {triangle} \
                             (edge lengths {u_length}, {v_length})"
                        );
                        stats.degenerate_skipped += 1;
                        continue;
                    }
                },
            };

            log::trace!("triangle {triangle}: {:?}", positions);
            self.rasterize_triangle(bindings, &corners, &basis, &mut fragment_shader, &mut stats)?;
            stats.triangles += 1;
        }

        log::debug!(
            "rendered {} triangles, {} fragments ({} depth-rejected, {} degenerate skipped)",
            stats.triangles,
            stats.fragments,
            stats.depth_rejected,
            stats.degenerate_skipped
        );
        Ok(stats)
    }

    /// Checks every precondition that does not depend on index values.
    /// Returns the vertex stride.
    fn validate(&self, vertices: &VertexBuffer<'_>, indices: &[u16]) -> Result<usize> {
        if indices.is_empty() {
            return Err(RasterError::EmptyIndexBuffer);
        }
        if indices.len() % 3 != 0 {
            return Err(RasterError::IncompleteTriangle { len: indices.len() });
        }
        if vertices.is_empty() {
            return Err(RasterError::EmptyVertexBuffer);
        }

        let stride = self.inputs.total_size();
        if stride == 0 {
            return Err(RasterError::EmptyInputLayout);
        }

        // A count too large to address can never be backed by the bytes.
        let needed = stride.checked_mul(vertices.count()).unwrap_or(usize::MAX);
        if vertices.bytes().len() < needed {
            return Err(RasterError::VertexBufferTooSmall {
                needed,
                actual: vertices.bytes().len(),
            });
        }
        Ok(stride)
    }

    fn shade_vertex<V>(
        &mut self,
        bindings: &mut ShaderBindings,
        vertices: &VertexBuffer<'_>,
        stride: usize,
        triangle: usize,
        index: u16,
        vertex_shader: &mut V,
    ) -> Result<ShadedVertex>
    where
        V: FnMut(&mut ShaderBindings),
    {
        if usize::from(index) >= vertices.count() {
            let err = RasterError::VertexIndexOutOfRange {
                triangle,
                index,
                vertex_count: vertices.count(),
            };
            log::warn!("render aborted: {err}");
            return Err(err);
        }

        self.inputs
            .load_from_buffer(vertices.vertex(usize::from(index), stride), bindings)?;
        vertex_shader(bindings);

        self.outputs.capture_all(bindings)?;
        Ok(ShadedVertex {
            position: bindings.clip_position,
            varyings: self.outputs.clone(),
        })
    }

    fn rasterize_triangle<F>(
        &mut self,
        bindings: &mut ShaderBindings,
        corners: &[ShadedVertex; 3],
        basis: &TriangleBasis,
        fragment_shader: &mut F,
        stats: &mut RenderStats,
    ) -> Result<()>
    where
        F: FnMut(&mut ShaderBindings),
    {
        let [p0, p1, p2] = [corners[0].position, corners[1].position, corners[2].position];
        let (v0, v1, v2) = (
            p0.truncate().truncate(),
            p1.truncate().truncate(),
            p2.truncate().truncate(),
        );
        // Only the part of the box that overlaps the buffer can produce pixels.
        let (min_x, min_y, max_x, max_y) = bounding_box(&[p0, p1, p2]);
        let (lo_x, lo_y, hi_x, hi_y) = self.framebuffer.logical_bounds();
        let (min_x, max_x) = (min_x.max(lo_x), max_x.min(hi_x));
        let (min_y, max_y) = (min_y.max(lo_y), max_y.min(hi_y));

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let (sx, sy) = self.framebuffer.to_raster(x, y);
                if !self.framebuffer.contains(sx, sy) {
                    continue;
                }

                let p = Vec2::new(x as f32, y as f32);
                if !point_in_triangle(p, v0, v1, v2) {
                    continue;
                }

                let (nx, ny) = basis.params(p);
                let z = mix(mix(p0.z, p1.z, nx), p2.z, ny);

                let stored = self.framebuffer.depth(sx, sy).unwrap_or(f32::NEG_INFINITY);
                if !(z < stored) {
                    stats.depth_rejected += 1;
                    continue;
                }
                self.framebuffer.set_depth(sx, sy, z);

                let varyings = corners[0]
                    .varyings
                    .blend(&corners[1].varyings, nx)?
                    .blend(&corners[2].varyings, ny)?;
                varyings.restore_all(bindings)?;
                fragment_shader(bindings);

                self.framebuffer.set_color(sx, sy, to_rgba8(bindings.frag_color));
                stats.fragments += 1;
            }
        }
        Ok(())
    }
}

/// `[0, 1]` float channels to bytes by truncating `c * 255`.
///
/// No rounding (0.999 → 254). Out-of-range channels saturate to 0 or 255
/// (NaN gives 0). A C float-to-byte cast is undefined for such input and
/// usually wraps; images relying on wrapped channels will differ.
#[inline]
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
        (color.w * 255.0) as u8,
    ]
}
