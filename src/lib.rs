/*!
# Lumen3D Lighting

Scene-light aggregation for the Lumen3D rendering engine.

This crate is the data-plane bridge between a scene graph and the GPU
pipeline: each frame it turns the scene's light sources into a compact,
renderer-consumable state snapshot — transformed into view space, batched
by light type, and filterable by a per-light visibility channel. It draws
nothing itself; the uniform-upload stage reads the aggregated state and
writes it to device memory.

## Architecture

- **Light / LightList**: the light data model and its slotmap-backed
  storage issuing stable `LightKey` identities
- **UniformsCache**: per-light cached uniform records, allocated once and
  reused across frames
- **LightAggregator**: the once-per-frame `setup` pass plus the
  channel-filtering query over the aggregated state
- **LightBuffers**: GPU-ready packing of the aggregated state for upload

## Example

```
use lumen_3d_lighting::camera::Camera;
use lumen_3d_lighting::light::{Light, LightList};
use lumen_3d_lighting::aggregator::LightAggregator;
use glam::{Mat4, Vec3};

let mut lights = LightList::new();
let key = lights.add(Light::ambient(Vec3::ONE, 0.25));

let camera = Camera::new(Mat4::IDENTITY, Mat4::IDENTITY);
let mut aggregator = LightAggregator::new();
aggregator.setup(&lights, &[key], &[], &camera);

assert_eq!(aggregator.state().ambient, Vec3::splat(0.25));
```
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod light;
pub mod uniforms;
pub mod aggregator;

// Error types at the crate root
pub use error::{Error, Result};

// Main lumen3d namespace module
pub mod lumen3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger};
        // Note: lumen_* macros are NOT re-exported here - they are internal only
    }

    // Camera
    pub use crate::camera::Camera;

    // Light sub-module with the scene-facing light types
    pub mod light {
        pub use crate::light::*;
    }

    // Uniform records, cache, and GPU packing
    pub mod uniforms {
        pub use crate::uniforms::*;
    }

    // Per-frame aggregation
    pub mod aggregator {
        pub use crate::aggregator::*;
    }
}

// Re-export math library at crate root
pub use glam;
