/// Per-light uniform record cache.
///
/// One table per light type, each keyed by the light's stable identity.
/// A record is allocated with its type's defaults the first time an
/// identity is seen and the same storage is returned on every later
/// lookup, so the aggregation pass mutates records in place frame after
/// frame without reallocating.
///
/// The cache never observes light removal on its own; the scene graph is
/// expected to call `forget` when it disposes a light. Entries otherwise
/// persist for the lifetime of the cache.

use rustc_hash::FxHashMap;
use crate::light::LightKey;
use crate::lumen_trace;
use super::records::{
    DirectionalUniforms, SpotUniforms, PointUniforms,
    HemisphereUniforms, RectAreaUniforms,
};

/// Identity-keyed storage of shader uniform records, one table per type.
///
/// Ambient lights carry no per-light record (they are accumulated, not
/// enumerated) and have no table here.
#[derive(Default)]
pub struct UniformsCache {
    directional: FxHashMap<LightKey, DirectionalUniforms>,
    spot: FxHashMap<LightKey, SpotUniforms>,
    point: FxHashMap<LightKey, PointUniforms>,
    hemisphere: FxHashMap<LightKey, HemisphereUniforms>,
    rect_area: FxHashMap<LightKey, RectAreaUniforms>,
}

impl UniformsCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a directional light, allocated on first sight.
    pub fn directional(&mut self, key: LightKey) -> &mut DirectionalUniforms {
        self.directional.entry(key).or_insert_with(|| {
            lumen_trace!("lumen3d::UniformsCache", "new directional record {:?}", key);
            DirectionalUniforms::default()
        })
    }

    /// Record for a spot light, allocated on first sight.
    pub fn spot(&mut self, key: LightKey) -> &mut SpotUniforms {
        self.spot.entry(key).or_insert_with(|| {
            lumen_trace!("lumen3d::UniformsCache", "new spot record {:?}", key);
            SpotUniforms::default()
        })
    }

    /// Record for a point light, allocated on first sight.
    pub fn point(&mut self, key: LightKey) -> &mut PointUniforms {
        self.point.entry(key).or_insert_with(|| {
            lumen_trace!("lumen3d::UniformsCache", "new point record {:?}", key);
            PointUniforms::default()
        })
    }

    /// Record for a hemisphere light, allocated on first sight.
    pub fn hemisphere(&mut self, key: LightKey) -> &mut HemisphereUniforms {
        self.hemisphere.entry(key).or_insert_with(|| {
            lumen_trace!("lumen3d::UniformsCache", "new hemisphere record {:?}", key);
            HemisphereUniforms::default()
        })
    }

    /// Record for a rect area light, allocated on first sight.
    pub fn rect_area(&mut self, key: LightKey) -> &mut RectAreaUniforms {
        self.rect_area.entry(key).or_insert_with(|| {
            lumen_trace!("lumen3d::UniformsCache", "new rect area record {:?}", key);
            RectAreaUniforms::default()
        })
    }

    /// Drop the record(s) held for an identity.
    ///
    /// Called by the scene-graph collaborator when a light is disposed.
    /// Returns false if no record existed for the key.
    pub fn forget(&mut self, key: LightKey) -> bool {
        let removed = self.directional.remove(&key).is_some()
            | self.spot.remove(&key).is_some()
            | self.point.remove(&key).is_some()
            | self.hemisphere.remove(&key).is_some()
            | self.rect_area.remove(&key).is_some();
        if removed {
            lumen_trace!("lumen3d::UniformsCache", "forgot record {:?}", key);
        }
        removed
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.directional.clear();
        self.spot.clear();
        self.point.clear();
        self.hemisphere.clear();
        self.rect_area.clear();
    }

    /// Total number of cached records across all types.
    pub fn len(&self) -> usize {
        self.directional.len()
            + self.spot.len()
            + self.point.len()
            + self.hemisphere.len()
            + self.rect_area.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
