/// Aggregated light state — the per-frame output read by the uniform
/// upload stage, plus the filtered view handed to individual passes.
///
/// All sequences preserve the caller's scene order. The state is
/// overwritten wholesale by each aggregation pass: entries are written
/// index-wise over last frame's storage and the tails are truncated, so
/// steady-state frames allocate nothing.

use glam::{Mat4, Vec3};
use crate::light::{ChannelMask, ShadowMapHandle};
use crate::uniforms::{
    DirectionalUniforms, SpotUniforms, PointUniforms,
    HemisphereUniforms, RectAreaUniforms,
};

// ===== SLOTS =====

/// One ambient light's contribution snapshot.
///
/// `color` holds the running total of all ambient contributions up to and
/// including this light, not the light's own increment. The channel filter
/// re-sums these totals for the snapshots whose mask passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSnapshot {
    /// Owning light's visibility channels
    pub mask: ChannelMask,
    /// Cumulative ambient sum up to and including this light
    pub color: Vec3,
}

/// A shadow map handle paired with its light's visibility channels, so
/// downstream consumers can channel-test shadow resources too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowMapSlot {
    /// Owning light's visibility channels
    pub mask: ChannelMask,
    /// The rendered shadow map
    pub map: ShadowMapHandle,
}

/// A light-space shadow matrix paired with a visibility mask.
///
/// The mask is the owning light's channels when a shadow map was resolved
/// for the light this frame, and empty otherwise; an empty mask fails
/// every channel test, so unstamped matrices drop out of filtered views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowMatrixSlot {
    /// Visibility channels, or empty when no map was resolved
    pub mask: ChannelMask,
    /// Light-space transform used to sample the shadow map
    pub matrix: Mat4,
}

// ===== AGGREGATED STATE =====

/// The full per-frame light state.
///
/// Per-type record sequences run parallel to their shadow map and shadow
/// matrix sequences (equal lengths after every aggregation pass). `hash`
/// summarizes the per-type counts plus the shadow count and is the key
/// for shader-variant selection: frames with equal composition share a
/// hash regardless of light values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedState {
    /// Composition hash: "directional,point,spot,rectArea,hemi,shadows"
    pub hash: String,

    /// Final cumulative ambient color
    pub ambient: Vec3,
    /// Per-ambient-light cumulative snapshots (consumed by the filter)
    pub ambients: Vec<AmbientSnapshot>,

    pub directional: Vec<DirectionalUniforms>,
    pub directional_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub directional_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub spot: Vec<SpotUniforms>,
    pub spot_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub spot_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub point: Vec<PointUniforms>,
    pub point_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub point_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub rect_area: Vec<RectAreaUniforms>,

    pub hemi: Vec<HemisphereUniforms>,
}

impl AggregatedState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }
}

// ===== FILTERED STATE =====

/// A channel-masked view derived from an `AggregatedState`.
///
/// Same shape minus the ambient snapshots; carries its own hash, which
/// leads with the query mask. Parallel sequences may differ in length
/// here: a record always carries its light's mask, while an unstamped
/// shadow matrix never passes any filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredState {
    /// Filtered hash: "mask,directional,point,spot,rectArea,hemi"
    pub hash: String,

    /// Ambient sum over the snapshots whose mask passes
    pub ambient: Vec3,

    pub directional: Vec<DirectionalUniforms>,
    pub directional_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub directional_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub spot: Vec<SpotUniforms>,
    pub spot_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub spot_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub point: Vec<PointUniforms>,
    pub point_shadow_maps: Vec<Option<ShadowMapSlot>>,
    pub point_shadow_matrices: Vec<ShadowMatrixSlot>,

    pub rect_area: Vec<RectAreaUniforms>,

    pub hemi: Vec<HemisphereUniforms>,
}

// ===== SLOT WRITES =====

/// Overwrite `seq[index]`, growing by one when writing one past the end.
///
/// The aggregation pass writes sequentially from index 0 and truncates
/// afterwards, so storage from a previous, larger frame is reused instead
/// of reallocated.
pub(super) fn write_slot<T>(seq: &mut Vec<T>, index: usize, value: T) {
    if index < seq.len() {
        seq[index] = value;
    } else {
        debug_assert_eq!(index, seq.len(), "non-sequential slot write: {}", index);
        seq.push(value);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
