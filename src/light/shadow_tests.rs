use glam::{Mat4, Vec2};
use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_shadow_defaults() {
    let shadow = LightShadow::default();
    assert_eq!(shadow.bias, 0.0);
    assert_eq!(shadow.radius, 1.0);
    assert_eq!(shadow.map_size, Vec2::new(512.0, 512.0));
    assert_eq!(shadow.matrix, Mat4::IDENTITY);
    assert!(shadow.map.is_none());
    assert_eq!(shadow.camera_near, 0.5);
    assert_eq!(shadow.camera_far, 500.0);
}

// ============================================================================
// Handles
// ============================================================================

#[test]
fn test_handle_identity() {
    let a = ShadowMapHandle(3);
    let b = ShadowMapHandle(3);
    let c = ShadowMapHandle(4);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_resolved_map_is_first_class() {
    let mut shadow = LightShadow::default();
    shadow.map = Some(ShadowMapHandle(7));
    assert_eq!(shadow.map, Some(ShadowMapHandle(7)));

    // Absence is a state, not a sentinel value
    shadow.map = None;
    assert!(shadow.map.is_none());
}
