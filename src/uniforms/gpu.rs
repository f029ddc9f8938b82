/// GPU-ready mirrors of the uniform records.
///
/// Shading passes consume light state as tightly packed arrays in uniform
/// or storage buffers. The structs here are `repr(C)` with explicit
/// padding to 16-byte rows, matching the shader-side struct layouts, so
/// the upload stage can memcpy the packed arrays as-is. Booleans become
/// `u32`; the host-side channel mask is not uploaded.
///
/// `LightBuffers` rebuilds the packed arrays from an `AggregatedState`
/// once per frame, reusing the allocations, and enforces the per-type
/// capacities the shader arrays were compiled with.

use bytemuck::{Pod, Zeroable};
use crate::aggregator::AggregatedState;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::lumen_error;
use super::records::{
    DirectionalUniforms, SpotUniforms, PointUniforms,
    HemisphereUniforms, RectAreaUniforms,
};

// ===== PACKED LIGHT STRUCTS =====

/// Packed directional light (48 bytes, three 16-byte rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    pub direction: [f32; 3],
    pub shadow: u32,
    pub color: [f32; 3],
    pub shadow_bias: f32,
    pub shadow_map_size: [f32; 2],
    pub shadow_radius: f32,
    pub _pad0: f32,
}

impl From<&DirectionalUniforms> for GpuDirectionalLight {
    fn from(rec: &DirectionalUniforms) -> Self {
        Self {
            direction: rec.direction.to_array(),
            shadow: rec.shadow as u32,
            color: rec.color.to_array(),
            shadow_bias: rec.shadow_bias,
            shadow_map_size: rec.shadow_map_size.to_array(),
            shadow_radius: rec.shadow_radius,
            _pad0: 0.0,
        }
    }
}

/// Packed spot light (80 bytes, five 16-byte rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuSpotLight {
    pub position: [f32; 3],
    pub distance: f32,
    pub direction: [f32; 3],
    pub decay: f32,
    pub color: [f32; 3],
    pub cone_cos: f32,
    pub penumbra_cos: f32,
    pub shadow: u32,
    pub shadow_bias: f32,
    pub shadow_radius: f32,
    pub shadow_map_size: [f32; 2],
    pub _pad0: [f32; 2],
}

impl From<&SpotUniforms> for GpuSpotLight {
    fn from(rec: &SpotUniforms) -> Self {
        Self {
            position: rec.position.to_array(),
            distance: rec.distance,
            direction: rec.direction.to_array(),
            decay: rec.decay,
            color: rec.color.to_array(),
            cone_cos: rec.cone_cos,
            penumbra_cos: rec.penumbra_cos,
            shadow: rec.shadow as u32,
            shadow_bias: rec.shadow_bias,
            shadow_radius: rec.shadow_radius,
            shadow_map_size: rec.shadow_map_size.to_array(),
            _pad0: [0.0; 2],
        }
    }
}

/// Packed point light (64 bytes, four 16-byte rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 3],
    pub distance: f32,
    pub color: [f32; 3],
    pub decay: f32,
    pub shadow: u32,
    pub shadow_bias: f32,
    pub shadow_radius: f32,
    pub shadow_camera_near: f32,
    pub shadow_map_size: [f32; 2],
    pub shadow_camera_far: f32,
    pub _pad0: f32,
}

impl From<&PointUniforms> for GpuPointLight {
    fn from(rec: &PointUniforms) -> Self {
        Self {
            position: rec.position.to_array(),
            distance: rec.distance,
            color: rec.color.to_array(),
            decay: rec.decay,
            shadow: rec.shadow as u32,
            shadow_bias: rec.shadow_bias,
            shadow_radius: rec.shadow_radius,
            shadow_camera_near: rec.shadow_camera_near,
            shadow_map_size: rec.shadow_map_size.to_array(),
            shadow_camera_far: rec.shadow_camera_far,
            _pad0: 0.0,
        }
    }
}

/// Packed hemisphere light (48 bytes, three 16-byte rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuHemisphereLight {
    pub direction: [f32; 3],
    pub _pad0: f32,
    pub sky_color: [f32; 3],
    pub _pad1: f32,
    pub ground_color: [f32; 3],
    pub _pad2: f32,
}

impl From<&HemisphereUniforms> for GpuHemisphereLight {
    fn from(rec: &HemisphereUniforms) -> Self {
        Self {
            direction: rec.direction.to_array(),
            _pad0: 0.0,
            sky_color: rec.sky_color.to_array(),
            _pad1: 0.0,
            ground_color: rec.ground_color.to_array(),
            _pad2: 0.0,
        }
    }
}

/// Packed rect area light (64 bytes, four 16-byte rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuRectAreaLight {
    pub color: [f32; 3],
    pub _pad0: f32,
    pub position: [f32; 3],
    pub _pad1: f32,
    pub half_width: [f32; 3],
    pub _pad2: f32,
    pub half_height: [f32; 3],
    pub _pad3: f32,
}

impl From<&RectAreaUniforms> for GpuRectAreaLight {
    fn from(rec: &RectAreaUniforms) -> Self {
        Self {
            color: rec.color.to_array(),
            _pad0: 0.0,
            position: rec.position.to_array(),
            _pad1: 0.0,
            half_width: rec.half_width.to_array(),
            _pad2: 0.0,
            half_height: rec.half_height.to_array(),
            _pad3: 0.0,
        }
    }
}

// ===== FRAME HEADER =====

/// Per-frame uniform header: camera matrices, ambient term, light counts.
///
/// Layout:
///   0: view (Mat4), 1: projection (Mat4), 2: viewProjection (Mat4),
///   3: ambient (vec3 + pad), 4: per-type light counts
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuFrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub directional_count: u32,
    pub point_count: u32,
    pub spot_count: u32,
    pub rect_area_count: u32,
    pub hemisphere_count: u32,
    pub _pad1: [u32; 3],
}

impl GpuFrameUniforms {
    /// Build the frame header from the camera and the aggregated state.
    pub fn new(camera: &Camera, state: &AggregatedState) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            view_projection: camera.view_projection_matrix().to_cols_array_2d(),
            ambient: state.ambient.to_array(),
            _pad0: 0.0,
            directional_count: state.directional.len() as u32,
            point_count: state.point.len() as u32,
            spot_count: state.spot.len() as u32,
            rect_area_count: state.rect_area.len() as u32,
            hemisphere_count: state.hemi.len() as u32,
            _pad1: [0; 3],
        }
    }
}

// ===== LIMITS =====

/// Per-type packing capacities.
///
/// These must match the array sizes the shading pipeline was compiled
/// with. Directional and hemisphere lights sit in small uniform-buffer
/// arrays; point and spot lights in larger storage-buffer arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightBufferLimits {
    pub directional: usize,
    pub point: usize,
    pub spot: usize,
    pub rect_area: usize,
    pub hemisphere: usize,
}

impl Default for LightBufferLimits {
    fn default() -> Self {
        Self {
            directional: 4,
            point: 256,
            spot: 128,
            rect_area: 64,
            hemisphere: 4,
        }
    }
}

// ===== LIGHT BUFFERS =====

/// Packed per-type light arrays, rebuilt from the aggregated state each
/// frame with allocations reused.
#[derive(Default)]
pub struct LightBuffers {
    limits: LightBufferLimits,
    directional: Vec<GpuDirectionalLight>,
    spot: Vec<GpuSpotLight>,
    point: Vec<GpuPointLight>,
    hemisphere: Vec<GpuHemisphereLight>,
    rect_area: Vec<GpuRectAreaLight>,
}

impl LightBuffers {
    /// Create buffers with the default limits.
    pub fn new() -> Self {
        Self::with_limits(LightBufferLimits::default())
    }

    /// Create buffers with explicit limits.
    pub fn with_limits(limits: LightBufferLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// The configured limits.
    pub fn limits(&self) -> &LightBufferLimits {
        &self.limits
    }

    /// Rebuild the packed arrays from the aggregated state.
    ///
    /// Fails without touching the previously packed data when a per-type
    /// count exceeds its capacity.
    pub fn pack(&mut self, state: &AggregatedState) -> Result<()> {
        self.check_capacity("directional", state.directional.len(), self.limits.directional)?;
        self.check_capacity("point", state.point.len(), self.limits.point)?;
        self.check_capacity("spot", state.spot.len(), self.limits.spot)?;
        self.check_capacity("rect_area", state.rect_area.len(), self.limits.rect_area)?;
        self.check_capacity("hemisphere", state.hemi.len(), self.limits.hemisphere)?;

        self.directional.clear();
        self.directional.extend(state.directional.iter().map(GpuDirectionalLight::from));

        self.spot.clear();
        self.spot.extend(state.spot.iter().map(GpuSpotLight::from));

        self.point.clear();
        self.point.extend(state.point.iter().map(GpuPointLight::from));

        self.hemisphere.clear();
        self.hemisphere.extend(state.hemi.iter().map(GpuHemisphereLight::from));

        self.rect_area.clear();
        self.rect_area.extend(state.rect_area.iter().map(GpuRectAreaLight::from));

        Ok(())
    }

    fn check_capacity(&self, kind: &'static str, count: usize, max: usize) -> Result<()> {
        if count > max {
            let err = Error::TooManyLights { kind, count, max };
            lumen_error!("lumen3d::LightBuffers", "{}", err);
            return Err(err);
        }
        Ok(())
    }

    // ===== PACKED ARRAYS =====

    pub fn directional(&self) -> &[GpuDirectionalLight] {
        &self.directional
    }

    pub fn spot(&self) -> &[GpuSpotLight] {
        &self.spot
    }

    pub fn point(&self) -> &[GpuPointLight] {
        &self.point
    }

    pub fn hemisphere(&self) -> &[GpuHemisphereLight] {
        &self.hemisphere
    }

    pub fn rect_area(&self) -> &[GpuRectAreaLight] {
        &self.rect_area
    }

    // ===== BYTE VIEWS (for the upload stage) =====

    pub fn directional_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.directional)
    }

    pub fn spot_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spot)
    }

    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.point)
    }

    pub fn hemisphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.hemisphere)
    }

    pub fn rect_area_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rect_area)
    }
}

#[cfg(test)]
#[path = "gpu_tests.rs"]
mod tests;
