//! Color and depth render targets.
//!
//! Raster space: origin top-left of the buffer, `0..width` × `0..height`.
//! Logical space (what the vertex stage emits): origin at the buffer center.

mod ppm;

use crate::config::CLEAR_DEPTH;

/// Fixed-size RGBA8 color raster plus a parallel `f32` depth raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// Row-major, 4 bytes per pixel.
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Transparent black color, depth at [`CLEAR_DEPTH`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_clear_depth(width, height, CLEAR_DEPTH)
    }

    pub fn with_clear_depth(width: u32, height: u32, clear_depth: f32) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; pixels * 4],
            depth: vec![clear_depth; pixels],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether raster coordinate `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Logical (center-origin) coordinate to raster coordinate.
    ///
    /// Saturates instead of overflowing, so far-away input maps outside the
    /// buffer.
    #[inline]
    pub fn to_raster(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.saturating_add((self.width / 2) as i32),
            y.saturating_add((self.height / 2) as i32),
        )
    }

    /// Inclusive logical bounds `(min_x, min_y, max_x, max_y)` of the buffer.
    ///
    /// A zero-sized axis yields `min > max`.
    pub fn logical_bounds(&self) -> (i32, i32, i32, i32) {
        let axis = |extent: u32| {
            let half = i64::from(extent / 2);
            (-half as i32, (i64::from(extent) - 1 - half) as i32)
        };
        let (min_x, max_x) = axis(self.width);
        let (min_y, max_y) = axis(self.height);
        (min_x, min_y, max_x, max_y)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// RGBA at raster `(x, y)`.
    pub fn color(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let i = self.index(x, y)? * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.color[i..i + 4]);
        Some(rgba)
    }

    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Callers validate `(x, y)` first; out-of-range writes are dropped.
    pub(crate) fn set_color(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        debug_assert!(self.contains(x, y), "set_color out of bounds: ({x}, {y})");
        if let Some(i) = self.index(x, y) {
            self.color[i * 4..i * 4 + 4].copy_from_slice(&rgba);
        }
    }

    pub(crate) fn set_depth(&mut self, x: i32, y: i32, z: f32) {
        debug_assert!(self.contains(x, y), "set_depth out of bounds: ({x}, {y})");
        if let Some(i) = self.index(x, y) {
            self.depth[i] = z;
        }
    }

    /// Raw row-major RGBA8 bytes.
    #[inline]
    pub fn color_bytes(&self) -> &[u8] {
        &self.color
    }

    #[inline]
    pub fn depth_values(&self) -> &[f32] {
        &self.depth
    }

    /// Rows of RGBA pixels, top to bottom.
    ///
    /// Always yields `height` rows; they are empty when `width` is 0.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = self.width as usize * 4;
        (0..self.height as usize).map(move |y| &self.color[y * stride..(y + 1) * stride])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        let fb = Framebuffer::new(3, 2);
        assert_eq!(fb.color_bytes().len(), 3 * 2 * 4);
        assert!(fb.color_bytes().iter().all(|&b| b == 0));
        assert!(fb.depth_values().iter().all(|&z| z == CLEAR_DEPTH));
    }

    #[test]
    fn custom_clear_depth() {
        let fb = Framebuffer::with_clear_depth(2, 2, 1.0);
        assert_eq!(fb.depth(1, 1), Some(1.0));
    }

    #[test]
    fn contains_bounds() {
        let fb = Framebuffer::new(4, 3);
        assert!(fb.contains(0, 0));
        assert!(fb.contains(3, 2));
        assert!(!fb.contains(4, 0));
        assert!(!fb.contains(0, 3));
        assert!(!fb.contains(-1, 1));
    }

    #[test]
    fn to_raster_offsets_by_half_extent() {
        let fb = Framebuffer::new(10, 7);
        assert_eq!(fb.to_raster(0, 0), (5, 3));
        assert_eq!(fb.to_raster(-5, -3), (0, 0));
    }

    #[test]
    fn to_raster_saturates_far_coordinates() {
        let fb = Framebuffer::new(8, 8);
        let (sx, sy) = fb.to_raster(i32::MAX, i32::MIN);
        assert_eq!((sx, sy), (i32::MAX, i32::MIN + 4));
        assert!(!fb.contains(sx, sy));
    }

    #[test]
    fn logical_bounds_match_raster_extent() {
        let fb = Framebuffer::new(10, 7);
        let (min_x, min_y, max_x, max_y) = fb.logical_bounds();
        assert_eq!((min_x, min_y, max_x, max_y), (-5, -3, 4, 3));
        assert_eq!(fb.to_raster(min_x, min_y), (0, 0));
        assert_eq!(fb.to_raster(max_x, max_y), (9, 6));
    }

    #[test]
    fn logical_bounds_of_empty_buffer_are_empty() {
        let (min_x, _, max_x, _) = Framebuffer::new(0, 4).logical_bounds();
        assert!(min_x > max_x);
    }

    #[test]
    fn set_and_get_pixel() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_color(2, 1, [10, 20, 30, 40]);
        fb.set_depth(2, 1, 0.5);

        assert_eq!(fb.color(2, 1), Some([10, 20, 30, 40]));
        assert_eq!(fb.depth(2, 1), Some(0.5));
        // Row-major layout.
        let i = (4 + 2) * 4;
        assert_eq!(&fb.color_bytes()[i..i + 4], &[10, 20, 30, 40]);
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let fb = Framebuffer::new(2, 2);
        assert_eq!(fb.color(2, 0), None);
        assert_eq!(fb.depth(0, -1), None);
    }

    #[test]
    fn rows_split_by_width() {
        let fb = Framebuffer::new(3, 5);
        assert_eq!(fb.rows().count(), 5);
        assert!(fb.rows().all(|r| r.len() == 12));
        assert_eq!(Framebuffer::new(0, 2).rows().count(), 2);
    }
}
