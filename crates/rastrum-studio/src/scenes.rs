//! Built-in scenes.

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use clap::ValueEnum;
use glam::{Mat4, Vec3, Vec4};
use rastrum_engine::{Rasterizer, RenderStats, ShaderBindings, Transforms, VertexBuffer};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum SceneKind {
    /// One triangle with red, green and blue corners.
    Triangle,
    /// A vertex-colored cube, rotated by `--angle`.
    Cube,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PosColorVertex {
    position: [f32; 3],
    color: [f32; 4],
}

const fn v(position: [f32; 3], color: [f32; 4]) -> PosColorVertex {
    PosColorVertex { position, color }
}

const CUBE_VERTICES: [PosColorVertex; 8] = [
    v([-1.0, 1.0, 1.0], [0.0, 0.0, 0.0, 1.0]),
    v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0, 1.0]),
    v([-1.0, -1.0, 1.0], [0.0, 1.0, 0.0, 1.0]),
    v([1.0, -1.0, 1.0], [0.0, 1.0, 1.0, 1.0]),
    v([-1.0, 1.0, -1.0], [1.0, 0.0, 0.0, 1.0]),
    v([1.0, 1.0, -1.0], [1.0, 0.0, 1.0, 1.0]),
    v([-1.0, -1.0, -1.0], [1.0, 1.0, 0.0, 1.0]),
    v([1.0, -1.0, -1.0], [1.0, 1.0, 1.0, 1.0]),
];

#[rustfmt::skip]
const CUBE_INDICES: [u16; 36] = [
    0, 1, 2,  1, 3, 2,
    4, 6, 5,  5, 6, 7,
    0, 2, 4,  4, 2, 6,
    1, 5, 3,  5, 7, 3,
    0, 4, 1,  4, 5, 1,
    2, 3, 6,  6, 3, 7,
];

/// Declares the bindings the scene shaders use and renders `kind`.
pub fn render(kind: SceneKind, raster: &mut Rasterizer, angle: f32) -> Result<RenderStats> {
    let mut io = ShaderBindings::new();
    let a_position = io.declare::<Vec3>("a_position");
    let a_color0 = io.declare::<Vec4>("a_color0");
    let v_color0 = io.declare::<Vec4>("v_color0");

    raster.add_attribute(a_position).add_attribute(a_color0);
    raster.add_output_attribute(&io, v_color0)?;

    let (width, height) = (raster.config().width as f32, raster.config().height as f32);
    let (vertices, indices): (Vec<PosColorVertex>, Vec<u16>) = match kind {
        SceneKind::Triangle => {
            let (hw, hh) = (width / 2.0, height / 2.0);
            let vertices = vec![
                v([-hw, -hh, 0.0], [1.0, 0.0, 0.0, 1.0]),
                v([hw - 1.0, -hh, 0.0], [0.0, 1.0, 0.0, 1.0]),
                v([-hw, hh - 1.0, 0.0], [0.0, 0.0, 1.0, 1.0]),
            ];
            (vertices, vec![0, 1, 2])
        }
        SceneKind::Cube => {
            // Orthographic, in pixels. Flip z so nearer surfaces get smaller depth.
            let scale = width.min(height) * 0.25;
            let proj = Mat4::from_scale(Vec3::new(scale, scale, -scale));
            io.transforms = Transforms::new(Mat4::IDENTITY, proj);
            io.transforms
                .set_model(Mat4::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), angle));
            (CUBE_VERTICES.to_vec(), CUBE_INDICES.to_vec())
        }
    };

    log::info!("rendering {kind:?}: {} vertices, {} triangles", vertices.len(), indices.len() / 3);

    let stats = raster
        .render(
            &mut io,
            VertexBuffer::from_slice(&vertices),
            &indices,
            move |io: &mut ShaderBindings| {
                io.clip_position = io.transforms.model_view_proj * io.get(a_position).extend(1.0);
                let color = io.get(a_color0);
                io.set(v_color0, color);
            },
            move |io: &mut ShaderBindings| io.frag_color = io.get(v_color0),
        )
        .with_context(|| format!("failed to render {kind:?} scene"))?;

    Ok(stats)
}
