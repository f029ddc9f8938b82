/// Light storage — a collection of scene lights with stable keys.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. The key doubles
/// as the light's identity throughout the lighting system: the uniform
/// cache is keyed by it, and the per-frame aggregation pass resolves the
/// caller's ordered key list against this storage.

use slotmap::{SlotMap, new_key_type};
use crate::lumen_debug;
use super::light::Light;

new_key_type! {
    /// Stable key for a Light within a LightList.
    ///
    /// Keys remain valid even after other lights are removed. A key
    /// becomes invalid only when its own light is removed.
    pub struct LightKey;
}

/// A collection of scene lights.
///
/// Lights are managed via stable keys (LightKey). The scene graph owns the
/// list, mutates light parameters between frames, and hands the aggregator
/// an ordered key list each frame.
#[derive(Default)]
pub struct LightList {
    lights: SlotMap<LightKey, Light>,
}

impl LightList {
    /// Create a new empty light list.
    pub fn new() -> Self {
        Self {
            lights: SlotMap::with_key(),
        }
    }

    /// Add a light and return its stable key.
    pub fn add(&mut self, light: Light) -> LightKey {
        let key = self.lights.insert(light);
        lumen_debug!("lumen3d::LightList", "added light {:?}", key);
        key
    }

    /// Remove a light. Returns false if the key is invalid.
    ///
    /// The uniform cache keeps its record for the removed identity until
    /// `LightAggregator::forget` is called with the same key.
    pub fn remove(&mut self, key: LightKey) -> bool {
        let removed = self.lights.remove(key).is_some();
        if removed {
            lumen_debug!("lumen3d::LightList", "removed light {:?}", key);
        }
        removed
    }

    /// Get a light by key.
    pub fn get(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key)
    }

    /// Get a mutable light by key.
    pub fn get_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        self.lights.get_mut(key)
    }

    /// Whether the key refers to a live light.
    pub fn contains_key(&self, key: LightKey) -> bool {
        self.lights.contains_key(key)
    }

    /// Iterate over all lights (key, light).
    pub fn iter(&self) -> impl Iterator<Item = (LightKey, &Light)> {
        self.lights.iter()
    }

    /// Iterate over all light keys.
    pub fn keys(&self) -> impl Iterator<Item = LightKey> + '_ {
        self.lights.keys()
    }

    /// Number of lights in the list.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }
}

#[cfg(test)]
#[path = "light_list_tests.rs"]
mod tests;
