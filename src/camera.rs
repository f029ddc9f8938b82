/// Camera — low-level passive data container.
///
/// The Camera computes nothing. The caller (game engine) is responsible
/// for computing and setting both matrices: the view matrix (inverse of
/// the camera's world transform) and the projection matrix.
///
/// The lighting system does NOT store or manage cameras. They are tools
/// provided to it, owned and driven by the caller.

use glam::Mat4;

/// Low-level camera. A passive data container — computes nothing.
///
/// The aggregation pass reads the view matrix to move light positions and
/// directions into view space; the GPU frame packing additionally reads
/// the projection matrix.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a new camera with the given matrices.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS — store, compute nothing =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
