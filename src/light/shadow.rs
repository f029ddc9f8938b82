/// Shadow configuration attached to shadow-capable lights.
///
/// The shadow-map rendering stage (external to this crate) owns the actual
/// textures. It resolves `map` to the handle of the rendered depth texture
/// and fills `matrix` with the light-space transform used to sample it.
/// This system only forwards both into the aggregated state.

use glam::{Mat4, Vec2};

/// Opaque handle naming a shadow map texture.
///
/// Issued by the external shadow-map stage; meaningless to this crate
/// beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadowMapHandle(pub u32);

/// Per-light shadow configuration.
///
/// Present on shadow-capable lights (directional, spot, point) whether or
/// not the light currently casts shadows; `map` is `None` until the shadow
/// stage has rendered a depth texture for the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightShadow {
    /// Depth bias applied when comparing against the shadow map
    pub bias: f32,
    /// Blur radius for soft shadow filtering
    pub radius: f32,
    /// Shadow map resolution in texels
    pub map_size: Vec2,
    /// Light-space transform used to sample the shadow map
    pub matrix: Mat4,
    /// Rendered shadow map, if the shadow stage has produced one
    pub map: Option<ShadowMapHandle>,
    /// Shadow camera near plane (point lights)
    pub camera_near: f32,
    /// Shadow camera far plane (point lights)
    pub camera_far: f32,
}

impl Default for LightShadow {
    fn default() -> Self {
        Self {
            bias: 0.0,
            radius: 1.0,
            map_size: Vec2::new(512.0, 512.0),
            matrix: Mat4::IDENTITY,
            map: None,
            camera_near: 0.5,
            camera_far: 500.0,
        }
    }
}

#[cfg(test)]
#[path = "shadow_tests.rs"]
mod tests;
