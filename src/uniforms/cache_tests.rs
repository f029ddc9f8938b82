use glam::Vec3;
use crate::light::{Light, LightList};
use super::*;

fn key_pair() -> (LightList, crate::light::LightKey, crate::light::LightKey) {
    let mut list = LightList::new();
    let a = list.add(Light::point(Vec3::ONE, 1.0, 0.0, 1.0));
    let b = list.add(Light::point(Vec3::ONE, 1.0, 0.0, 1.0));
    (list, a, b)
}

// ============================================================================
// Identity stability
// ============================================================================

#[test]
fn test_same_key_returns_same_storage() {
    let (_list, key, _) = key_pair();
    let mut cache = UniformsCache::new();

    cache.point(key).distance = 12.5;

    // Second lookup sees the mutation made through the first
    assert_eq!(cache.point(key).distance, 12.5);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_distinct_keys_get_distinct_records() {
    let (_list, a, b) = key_pair();
    let mut cache = UniformsCache::new();

    cache.point(a).distance = 1.0;
    cache.point(b).distance = 2.0;

    assert_eq!(cache.point(a).distance, 1.0);
    assert_eq!(cache.point(b).distance, 2.0);
    assert_eq!(cache.len(), 2);
}

// ============================================================================
// Type-shape defaults on first sight
// ============================================================================

#[test]
fn test_fresh_directional_record_has_defaults() {
    let (_list, key, _) = key_pair();
    let mut cache = UniformsCache::new();

    let rec = cache.directional(key);
    assert_eq!(rec.shadow_radius, 1.0);
    assert!(!rec.shadow);
}

#[test]
fn test_fresh_point_record_has_camera_defaults() {
    let (_list, key, _) = key_pair();
    let mut cache = UniformsCache::new();

    let rec = cache.point(key);
    assert_eq!(rec.shadow_radius, 1.0);
    assert_eq!(rec.shadow_camera_near, 1.0);
    assert_eq!(rec.shadow_camera_far, 1000.0);
}

#[test]
fn test_each_type_table_is_independent() {
    let (_list, key, _) = key_pair();
    let mut cache = UniformsCache::new();

    // The same identity may hold records of several types (a light whose
    // kind changed); tables do not alias
    cache.directional(key).shadow_bias = 0.5;
    cache.spot(key).distance = 3.0;
    cache.hemisphere(key).sky_color = Vec3::ONE;
    cache.rect_area(key).color = Vec3::ONE;

    assert_eq!(cache.len(), 4);
    assert_eq!(cache.directional(key).shadow_bias, 0.5);
    assert_eq!(cache.spot(key).distance, 3.0);
}

// ============================================================================
// forget / clear
// ============================================================================

#[test]
fn test_forget_drops_only_named_identity() {
    let (_list, a, b) = key_pair();
    let mut cache = UniformsCache::new();

    cache.point(a).distance = 1.0;
    cache.point(b).distance = 2.0;

    assert!(cache.forget(a));
    assert_eq!(cache.len(), 1);
    // A fresh record is allocated on the next lookup
    assert_eq!(cache.point(a).distance, 0.0);
    // The other identity's record is untouched
    assert_eq!(cache.point(b).distance, 2.0);
}

#[test]
fn test_forget_unknown_key_returns_false() {
    let (_list, a, _) = key_pair();
    let mut cache = UniformsCache::new();
    assert!(!cache.forget(a));
}

#[test]
fn test_forget_covers_all_type_tables() {
    let (_list, key, _) = key_pair();
    let mut cache = UniformsCache::new();

    cache.directional(key);
    cache.rect_area(key);

    assert!(cache.forget(key));
    assert!(cache.is_empty());
}

#[test]
fn test_clear() {
    let (_list, a, b) = key_pair();
    let mut cache = UniformsCache::new();

    cache.point(a);
    cache.spot(b);
    cache.clear();

    assert!(cache.is_empty());
}
