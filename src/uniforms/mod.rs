//! Per-light uniform records, their cache, and GPU packing
//!
//! A uniform record is the view-space, shader-facing image of one light.
//! Records are allocated once per light identity and mutated in place
//! every frame; the GPU sub-module mirrors them into tightly packed
//! `repr(C)` structs for the upload stage.

mod records;
mod cache;
pub mod gpu;

pub use records::{
    DirectionalUniforms, SpotUniforms, PointUniforms,
    HemisphereUniforms, RectAreaUniforms,
};
pub use cache::UniformsCache;
pub use gpu::{
    GpuDirectionalLight, GpuSpotLight, GpuPointLight,
    GpuHemisphereLight, GpuRectAreaLight,
    GpuFrameUniforms, LightBufferLimits, LightBuffers,
};
