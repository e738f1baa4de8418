/// Depth every pixel starts at. Effectively +infinity for scene-scale depths.
pub const CLEAR_DEPTH: f32 = 4_194_304.0;

/// What a render call does with a triangle whose setup edges have no length.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DegenerateTriangles {
    /// Abort the render call with [`RasterError::DegenerateTriangle`](crate::RasterError::DegenerateTriangle).
    #[default]
    Reject,
    /// Log a warning, count it in [`RenderStats`](crate::raster::RenderStats) and move on.
    Skip,
}

/// Rasterizer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterConfig {
    pub width: u32,
    pub height: u32,
    pub clear_depth: f32,
    pub degenerate: DegenerateTriangles,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            clear_depth: CLEAR_DEPTH,
            degenerate: DegenerateTriangles::Reject,
        }
    }
}

impl RasterConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
