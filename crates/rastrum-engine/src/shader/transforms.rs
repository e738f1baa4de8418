use glam::Mat4;

/// Uniform matrix block shared by the vertex and fragment stages.
///
/// Composites are kept consistent by the setters; assign fields directly
/// only when deliberately feeding the shaders inconsistent matrices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    pub view: Mat4,
    pub inv_view: Mat4,
    pub proj: Mat4,
    pub inv_proj: Mat4,
    pub view_proj: Mat4,
    pub inv_view_proj: Mat4,
    pub model: Mat4,
    pub model_view: Mat4,
    pub model_view_proj: Mat4,
}

impl Default for Transforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            inv_view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            inv_proj: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            inv_view_proj: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
            model_view: Mat4::IDENTITY,
            model_view_proj: Mat4::IDENTITY,
        }
    }
}

impl Transforms {
    /// Builds the block from a view and projection matrix, with an identity model.
    pub fn new(view: Mat4, proj: Mat4) -> Self {
        let mut transforms = Self::default();
        transforms.set_view_proj(view, proj);
        transforms
    }

    /// Replaces view and projection and refreshes every derived matrix.
    pub fn set_view_proj(&mut self, view: Mat4, proj: Mat4) {
        self.view = view;
        self.inv_view = view.inverse();
        self.proj = proj;
        self.inv_proj = proj.inverse();
        self.view_proj = proj * view;
        self.inv_view_proj = self.view_proj.inverse();
        self.refresh_model();
    }

    /// Replaces the model matrix and refreshes `model_view` / `model_view_proj`.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
        self.refresh_model();
    }

    fn refresh_model(&mut self) {
        self.model_view = self.view * self.model;
        self.model_view_proj = self.view_proj * self.model;
    }
}
