/// Shader-facing uniform records, one shape per light type.
///
/// Every field is a shader-uniform slot; values are in view space where a
/// space applies. Records live in the `UniformsCache` and are rewritten in
/// place by the aggregation pass, so a field the pass skips on a given
/// frame (e.g. shadow parameters of a light that stopped casting) keeps
/// its previous value.
///
/// `mask` is host-side bookkeeping for the channel filter, refreshed from
/// the owning light every frame; it is not uploaded.

use glam::{Vec2, Vec3};
use crate::light::ChannelMask;

// ===== DIRECTIONAL =====

/// Uniforms of one directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalUniforms {
    /// View-space direction from the target toward the light
    pub direction: Vec3,
    /// Color pre-multiplied by intensity
    pub color: Vec3,
    /// Whether the shadow map should be sampled
    pub shadow: bool,
    /// Depth comparison bias
    pub shadow_bias: f32,
    /// Soft shadow blur radius
    pub shadow_radius: f32,
    /// Shadow map resolution in texels
    pub shadow_map_size: Vec2,
    /// Owning light's visibility channels
    pub mask: ChannelMask,
}

impl Default for DirectionalUniforms {
    fn default() -> Self {
        Self {
            direction: Vec3::ZERO,
            color: Vec3::ZERO,
            shadow: false,
            shadow_bias: 0.0,
            shadow_radius: 1.0,
            shadow_map_size: Vec2::ZERO,
            mask: ChannelMask::empty(),
        }
    }
}

// ===== SPOT =====

/// Uniforms of one spot light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotUniforms {
    /// View-space position
    pub position: Vec3,
    /// View-space direction from the target toward the light
    pub direction: Vec3,
    /// Color pre-multiplied by intensity
    pub color: Vec3,
    /// Cutoff distance (0 = unbounded)
    pub distance: f32,
    /// Cosine of the cone half-angle
    pub cone_cos: f32,
    /// Cosine of the inner (full-intensity) cone angle
    pub penumbra_cos: f32,
    /// Distance falloff exponent; forced to 0 when distance is 0
    pub decay: f32,
    /// Whether the shadow map should be sampled
    pub shadow: bool,
    /// Depth comparison bias
    pub shadow_bias: f32,
    /// Soft shadow blur radius
    pub shadow_radius: f32,
    /// Shadow map resolution in texels
    pub shadow_map_size: Vec2,
    /// Owning light's visibility channels
    pub mask: ChannelMask,
}

impl Default for SpotUniforms {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            color: Vec3::ZERO,
            distance: 0.0,
            cone_cos: 0.0,
            penumbra_cos: 0.0,
            decay: 0.0,
            shadow: false,
            shadow_bias: 0.0,
            shadow_radius: 1.0,
            shadow_map_size: Vec2::ZERO,
            mask: ChannelMask::empty(),
        }
    }
}

// ===== POINT =====

/// Uniforms of one point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointUniforms {
    /// View-space position
    pub position: Vec3,
    /// Color pre-multiplied by intensity
    pub color: Vec3,
    /// Cutoff distance (0 = unbounded)
    pub distance: f32,
    /// Distance falloff exponent; forced to 0 when distance is 0
    pub decay: f32,
    /// Whether the shadow map should be sampled
    pub shadow: bool,
    /// Depth comparison bias
    pub shadow_bias: f32,
    /// Soft shadow blur radius
    pub shadow_radius: f32,
    /// Shadow map resolution in texels
    pub shadow_map_size: Vec2,
    /// Shadow cube camera near plane
    pub shadow_camera_near: f32,
    /// Shadow cube camera far plane
    pub shadow_camera_far: f32,
    /// Owning light's visibility channels
    pub mask: ChannelMask,
}

impl Default for PointUniforms {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Vec3::ZERO,
            distance: 0.0,
            decay: 0.0,
            shadow: false,
            shadow_bias: 0.0,
            shadow_radius: 1.0,
            shadow_map_size: Vec2::ZERO,
            shadow_camera_near: 1.0,
            shadow_camera_far: 1000.0,
            mask: ChannelMask::empty(),
        }
    }
}

// ===== HEMISPHERE =====

/// Uniforms of one hemisphere light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereUniforms {
    /// View-space up direction of the gradient, normalized
    pub direction: Vec3,
    /// Sky color pre-multiplied by intensity
    pub sky_color: Vec3,
    /// Ground color pre-multiplied by intensity
    pub ground_color: Vec3,
    /// Owning light's visibility channels
    pub mask: ChannelMask,
}

impl Default for HemisphereUniforms {
    fn default() -> Self {
        Self {
            direction: Vec3::ZERO,
            sky_color: Vec3::ZERO,
            ground_color: Vec3::ZERO,
            mask: ChannelMask::empty(),
        }
    }
}

// ===== RECT AREA =====

/// Uniforms of one rectangular area light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectAreaUniforms {
    /// Color scaled to irradiance: intensity / (width * height)
    pub color: Vec3,
    /// View-space position of the rectangle center
    pub position: Vec3,
    /// View-space half-extent along the rectangle's width axis
    pub half_width: Vec3,
    /// View-space half-extent along the rectangle's height axis
    pub half_height: Vec3,
    /// Owning light's visibility channels
    pub mask: ChannelMask,
}

impl Default for RectAreaUniforms {
    fn default() -> Self {
        Self {
            color: Vec3::ZERO,
            position: Vec3::ZERO,
            half_width: Vec3::ZERO,
            half_height: Vec3::ZERO,
            mask: ChannelMask::empty(),
        }
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
