/// The per-frame light aggregation pass.
///
/// `setup` runs once per frame, strictly after the scene graph has
/// resolved world transforms and before draw calls read the state. It
/// classifies each light of the caller's ordered frame list, moves its
/// values into view space, and rewrites the per-light cached uniform
/// record in place; the state sequences hold snapshots of those records
/// in frame order.
///
/// `lights_by_channel` derives masked views of the finished state for
/// individual render passes without re-running any transform math. It
/// takes `&self`, so filtered queries can never race the `&mut self`
/// aggregation pass on the same instance.

use glam::{Mat3, Mat4, Vec3};
use crate::camera::Camera;
use crate::light::{ChannelMask, LightKind, LightKey, LightList};
use crate::lumen_debug;
use crate::uniforms::UniformsCache;
use super::state::{
    write_slot, AggregatedState, AmbientSnapshot, FilteredState,
    ShadowMapSlot, ShadowMatrixSlot,
};

/// Transform a direction into view space: rotate by the view matrix's
/// linear part and renormalize. Degenerate input maps to zero.
fn view_direction(view: &Mat4, direction: Vec3) -> Vec3 {
    view.transform_vector3(direction).normalize_or_zero()
}

/// Rotation-only part of a transform: its basis columns, normalized.
fn extract_rotation(matrix: &Mat4) -> Mat3 {
    Mat3::from_cols(
        matrix.x_axis.truncate().normalize_or_zero(),
        matrix.y_axis.truncate().normalize_or_zero(),
        matrix.z_axis.truncate().normalize_or_zero(),
    )
}

/// Aggregates scene lights into renderer-consumable uniform state.
///
/// One instance per renderer context; the instance owns its uniform cache
/// and its state exclusively.
#[derive(Default)]
pub struct LightAggregator {
    cache: UniformsCache,
    state: AggregatedState,
}

impl LightAggregator {
    /// Create a new aggregator with an empty cache and state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state produced by the most recent `setup` call.
    pub fn state(&self) -> &AggregatedState {
        &self.state
    }

    /// Drop cached uniform storage for a disposed light.
    ///
    /// Call when the light is removed from its `LightList`; the cache has
    /// no other way to observe disposal. Returns false if the identity
    /// held no record.
    pub fn forget(&mut self, key: LightKey) -> bool {
        self.cache.forget(key)
    }

    /// Aggregate the frame's lights into `state`.
    ///
    /// # Arguments
    ///
    /// * `lights` - Light storage resolving keys to lights
    /// * `frame` - The caller's ordered light list for this frame; output
    ///   sequences preserve this order. Stale keys are skipped.
    /// * `shadows` - The frame's shadow-casting lights; only the length is
    ///   used, as part of the composition hash
    /// * `camera` - Supplies the world-to-view matrix
    pub fn setup(
        &mut self,
        lights: &LightList,
        frame: &[LightKey],
        shadows: &[LightKey],
        camera: &Camera,
    ) {
        let view = *camera.view_matrix();

        let mut ambient = Vec3::ZERO;

        let mut ambient_len = 0;
        let mut directional_len = 0;
        let mut point_len = 0;
        let mut spot_len = 0;
        let mut rect_area_len = 0;
        let mut hemi_len = 0;

        for &key in frame {
            let light = match lights.get(key) {
                Some(light) => light,
                None => continue,
            };

            let channel = light.channel;

            // Resolved shadow map, if the light casts and the shadow pass
            // has produced one. The matrix slot is channel-stamped only in
            // that case; an unstamped matrix fails every channel test.
            let shadow_map = if light.cast_shadow {
                light.shadow.as_ref().and_then(|s| s.map)
            } else {
                None
            };
            let shadow_matrix = light.shadow.as_ref().map_or(Mat4::IDENTITY, |s| s.matrix);
            let matrix_mask = if shadow_map.is_some() {
                channel
            } else {
                ChannelMask::empty()
            };
            let map_slot = shadow_map.map(|map| ShadowMapSlot { mask: channel, map });
            let matrix_slot = ShadowMatrixSlot {
                mask: matrix_mask,
                matrix: shadow_matrix,
            };

            match light.kind {
                LightKind::Ambient => {
                    ambient += light.color * light.intensity;
                    write_slot(
                        &mut self.state.ambients,
                        ambient_len,
                        AmbientSnapshot {
                            mask: channel,
                            color: ambient,
                        },
                    );
                    ambient_len += 1;
                }

                LightKind::Directional { target } => {
                    let rec = self.cache.directional(key);
                    rec.mask = channel;
                    rec.color = light.color * light.intensity;
                    rec.direction = view_direction(&view, light.world_position() - target);

                    rec.shadow = light.cast_shadow;
                    if light.cast_shadow {
                        if let Some(shadow) = &light.shadow {
                            rec.shadow_bias = shadow.bias;
                            rec.shadow_radius = shadow.radius;
                            rec.shadow_map_size = shadow.map_size;
                        }
                    }

                    let snapshot = *rec;
                    write_slot(&mut self.state.directional_shadow_maps, directional_len, map_slot);
                    write_slot(&mut self.state.directional_shadow_matrices, directional_len, matrix_slot);
                    write_slot(&mut self.state.directional, directional_len, snapshot);
                    directional_len += 1;
                }

                LightKind::Spot { target, distance, decay, angle, penumbra } => {
                    let rec = self.cache.spot(key);
                    rec.mask = channel;
                    rec.position = view.transform_point3(light.world_position());
                    rec.color = light.color * light.intensity;
                    rec.distance = distance;
                    rec.direction = view_direction(&view, light.world_position() - target);
                    rec.cone_cos = angle.cos();
                    rec.penumbra_cos = (angle * (1.0 - penumbra)).cos();
                    rec.decay = if distance == 0.0 { 0.0 } else { decay };

                    rec.shadow = light.cast_shadow;
                    if light.cast_shadow {
                        if let Some(shadow) = &light.shadow {
                            rec.shadow_bias = shadow.bias;
                            rec.shadow_radius = shadow.radius;
                            rec.shadow_map_size = shadow.map_size;
                        }
                    }

                    let snapshot = *rec;
                    write_slot(&mut self.state.spot_shadow_maps, spot_len, map_slot);
                    write_slot(&mut self.state.spot_shadow_matrices, spot_len, matrix_slot);
                    write_slot(&mut self.state.spot, spot_len, snapshot);
                    spot_len += 1;
                }

                LightKind::Point { distance, decay } => {
                    let rec = self.cache.point(key);
                    rec.mask = channel;
                    rec.position = view.transform_point3(light.world_position());
                    rec.color = light.color * light.intensity;
                    rec.distance = distance;
                    rec.decay = if distance == 0.0 { 0.0 } else { decay };

                    rec.shadow = light.cast_shadow;
                    if light.cast_shadow {
                        if let Some(shadow) = &light.shadow {
                            rec.shadow_bias = shadow.bias;
                            rec.shadow_radius = shadow.radius;
                            rec.shadow_map_size = shadow.map_size;
                            rec.shadow_camera_near = shadow.camera_near;
                            rec.shadow_camera_far = shadow.camera_far;
                        }
                    }

                    let snapshot = *rec;
                    write_slot(&mut self.state.point_shadow_maps, point_len, map_slot);
                    write_slot(&mut self.state.point_shadow_matrices, point_len, matrix_slot);
                    write_slot(&mut self.state.point, point_len, snapshot);
                    point_len += 1;
                }

                LightKind::RectArea { width, height } => {
                    let rec = self.cache.rect_area(key);
                    rec.mask = channel;
                    // Intensity controls the irradiance of the entire
                    // light, not the radiance per unit area
                    rec.color = light.color * (light.intensity / (width * height));
                    rec.position = view.transform_point3(light.world_position());

                    // Half-extent vectors rotated into view space
                    let rotation = extract_rotation(&(view * light.world));
                    rec.half_width = rotation * Vec3::new(width * 0.5, 0.0, 0.0);
                    rec.half_height = rotation * Vec3::new(0.0, height * 0.5, 0.0);

                    let snapshot = *rec;
                    write_slot(&mut self.state.rect_area, rect_area_len, snapshot);
                    rect_area_len += 1;
                }

                LightKind::Hemisphere { ground_color } => {
                    let rec = self.cache.hemisphere(key);
                    rec.mask = channel;
                    rec.direction = view_direction(&view, light.world_position());
                    rec.sky_color = light.color * light.intensity;
                    rec.ground_color = ground_color * light.intensity;

                    let snapshot = *rec;
                    write_slot(&mut self.state.hemi, hemi_len, snapshot);
                    hemi_len += 1;
                }
            }
        }

        self.state.ambient = ambient;

        // Drop stale tails from a previous, larger frame
        self.state.ambients.truncate(ambient_len);
        self.state.directional.truncate(directional_len);
        self.state.directional_shadow_maps.truncate(directional_len);
        self.state.directional_shadow_matrices.truncate(directional_len);
        self.state.spot.truncate(spot_len);
        self.state.spot_shadow_maps.truncate(spot_len);
        self.state.spot_shadow_matrices.truncate(spot_len);
        self.state.point.truncate(point_len);
        self.state.point_shadow_maps.truncate(point_len);
        self.state.point_shadow_matrices.truncate(point_len);
        self.state.rect_area.truncate(rect_area_len);
        self.state.hemi.truncate(hemi_len);

        let hash = format!(
            "{},{},{},{},{},{}",
            directional_len, point_len, spot_len, rect_area_len, hemi_len,
            shadows.len()
        );
        if hash != self.state.hash {
            lumen_debug!("lumen3d::LightAggregator", "light composition changed: {}", hash);
        }
        self.state.hash = hash;
    }

    /// Derive the view of the aggregated state for one visibility channel.
    ///
    /// Pure with respect to `state`: no transform math is re-run and
    /// nothing is mutated. May be called any number of times per frame
    /// with different channels; results are independent.
    pub fn lights_by_channel(&self, channel: ChannelMask) -> FilteredState {
        let state = &self.state;

        // Ambient snapshots hold cumulative totals; re-sum the passing ones
        let mut ambient = Vec3::ZERO;
        for snapshot in &state.ambients {
            if channel.test(snapshot.mask) {
                ambient += snapshot.color;
            }
        }

        let directional: Vec<_> = state.directional.iter()
            .filter(|rec| channel.test(rec.mask))
            .copied()
            .collect();
        let spot: Vec<_> = state.spot.iter()
            .filter(|rec| channel.test(rec.mask))
            .copied()
            .collect();
        let point: Vec<_> = state.point.iter()
            .filter(|rec| channel.test(rec.mask))
            .copied()
            .collect();
        let rect_area: Vec<_> = state.rect_area.iter()
            .filter(|rec| channel.test(rec.mask))
            .copied()
            .collect();
        let hemi: Vec<_> = state.hemi.iter()
            .filter(|rec| channel.test(rec.mask))
            .copied()
            .collect();

        let hash = format!(
            "{},{},{},{},{},{}",
            channel.mask(),
            directional.len(), point.len(), spot.len(), rect_area.len(), hemi.len()
        );

        FilteredState {
            hash,
            ambient,

            directional,
            directional_shadow_maps: filter_maps(&state.directional_shadow_maps, channel),
            directional_shadow_matrices: filter_matrices(&state.directional_shadow_matrices, channel),

            spot,
            spot_shadow_maps: filter_maps(&state.spot_shadow_maps, channel),
            spot_shadow_matrices: filter_matrices(&state.spot_shadow_matrices, channel),

            point,
            point_shadow_maps: filter_maps(&state.point_shadow_maps, channel),
            point_shadow_matrices: filter_matrices(&state.point_shadow_matrices, channel),

            rect_area,

            hemi,
        }
    }
}

/// Keep empty slots (nothing to mask-test) and slots whose mask passes.
fn filter_maps(slots: &[Option<ShadowMapSlot>], channel: ChannelMask) -> Vec<Option<ShadowMapSlot>> {
    slots.iter()
        .filter(|slot| slot.map_or(true, |s| channel.test(s.mask)))
        .copied()
        .collect()
}

/// Keep matrix slots whose mask passes; unstamped slots never do.
fn filter_matrices(slots: &[ShadowMatrixSlot], channel: ChannelMask) -> Vec<ShadowMatrixSlot> {
    slots.iter()
        .filter(|slot| channel.test(slot.mask))
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
