/// The scene light data model.
///
/// A `Light` is a passive description owned by the scene graph: world
/// transform already resolved, parameters in scene units. The aggregation
/// pass reads it and never writes it.
///
/// The six supported light types form a closed enum, so the per-type
/// dispatch in the aggregation pass is an exhaustive match and "unhandled
/// light type" cannot exist at runtime.

use glam::{Mat4, Vec3};
use super::channel::ChannelMask;
use super::shadow::LightShadow;

// ===== LIGHT KIND =====

/// Tagged variant over the supported light types, carrying the
/// type-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Omnidirectional constant illumination, accumulated, never cached
    Ambient,
    /// Parallel rays aimed from the light's position toward `target`
    Directional {
        /// World-space position the light is aimed at
        target: Vec3,
    },
    /// Point source with distance falloff
    Point {
        /// Cutoff distance (0 = unbounded)
        distance: f32,
        /// Falloff exponent; ignored when `distance` is 0
        decay: f32,
    },
    /// Cone-shaped source aimed at `target`
    Spot {
        /// World-space position the light is aimed at
        target: Vec3,
        /// Cutoff distance (0 = unbounded)
        distance: f32,
        /// Falloff exponent; ignored when `distance` is 0
        decay: f32,
        /// Cone half-angle in radians
        angle: f32,
        /// Fraction [0, 1] of the cone over which intensity falls off
        penumbra: f32,
    },
    /// Rectangular area source
    RectArea {
        /// Rectangle width in scene units
        width: f32,
        /// Rectangle height in scene units
        height: f32,
    },
    /// Sky/ground gradient source
    Hemisphere {
        /// Color of the lower hemisphere (`color` is the sky)
        ground_color: Vec3,
    },
}

// ===== LIGHT =====

/// A scene light source.
///
/// Fields common to every type live here; type-specific parameters live in
/// `kind`. `shadow` is populated for shadow-capable kinds (directional,
/// spot, point) by the constructors; whether the light actually casts is
/// the separate `cast_shadow` flag, so toggling shadows does not lose the
/// shadow configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light color (linear RGB); sky color for hemisphere lights
    pub color: Vec3,
    /// Intensity multiplier applied to `color`
    pub intensity: f32,
    /// Resolved world transform (set by the scene graph)
    pub world: Mat4,
    /// Visibility channels this light illuminates
    pub channel: ChannelMask,
    /// Whether the light casts shadows this frame
    pub cast_shadow: bool,
    /// Shadow configuration, present on shadow-capable kinds
    pub shadow: Option<LightShadow>,
    /// Type tag plus type-specific parameters
    pub kind: LightKind,
}

impl Light {
    /// Ambient light: constant illumination with no position.
    pub fn ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            world: Mat4::IDENTITY,
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: None,
            kind: LightKind::Ambient,
        }
    }

    /// Directional light placed at +Y, aimed at the origin.
    pub fn directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            world: Mat4::from_translation(Vec3::Y),
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: Some(LightShadow::default()),
            kind: LightKind::Directional { target: Vec3::ZERO },
        }
    }

    /// Point light at the origin.
    pub fn point(color: Vec3, intensity: f32, distance: f32, decay: f32) -> Self {
        Self {
            color,
            intensity,
            world: Mat4::IDENTITY,
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: Some(LightShadow::default()),
            kind: LightKind::Point { distance, decay },
        }
    }

    /// Spot light placed at +Y, aimed at the origin.
    ///
    /// # Arguments
    ///
    /// * `angle` - Cone half-angle in radians
    /// * `penumbra` - Fraction [0, 1] of the cone with intensity falloff
    pub fn spot(
        color: Vec3,
        intensity: f32,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
    ) -> Self {
        Self {
            color,
            intensity,
            world: Mat4::from_translation(Vec3::Y),
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: Some(LightShadow::default()),
            kind: LightKind::Spot {
                target: Vec3::ZERO,
                distance,
                decay,
                angle,
                penumbra,
            },
        }
    }

    /// Rectangular area light at the origin, facing -Z.
    pub fn rect_area(color: Vec3, intensity: f32, width: f32, height: f32) -> Self {
        Self {
            color,
            intensity,
            world: Mat4::IDENTITY,
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: None,
            kind: LightKind::RectArea { width, height },
        }
    }

    /// Hemisphere light placed at +Y.
    pub fn hemisphere(sky_color: Vec3, ground_color: Vec3, intensity: f32) -> Self {
        Self {
            color: sky_color,
            intensity,
            world: Mat4::from_translation(Vec3::Y),
            channel: ChannelMask::default(),
            cast_shadow: false,
            shadow: None,
            kind: LightKind::Hemisphere { ground_color },
        }
    }

    // ===== ACCESSORS =====

    /// World-space position: the translation column of the world transform.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
