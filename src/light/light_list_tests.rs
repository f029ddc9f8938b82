use glam::Vec3;
use super::*;

fn white_point() -> Light {
    Light::point(Vec3::ONE, 1.0, 0.0, 1.0)
}

// ============================================================================
// Add / get
// ============================================================================

#[test]
fn test_add_and_get() {
    let mut list = LightList::new();
    let key = list.add(white_point());

    assert_eq!(list.len(), 1);
    assert!(list.contains_key(key));
    assert!(list.get(key).is_some());
}

#[test]
fn test_get_mut_updates_light() {
    let mut list = LightList::new();
    let key = list.add(white_point());

    list.get_mut(key).unwrap().intensity = 4.0;
    assert_eq!(list.get(key).unwrap().intensity, 4.0);
}

// ============================================================================
// Remove / key stability
// ============================================================================

#[test]
fn test_remove() {
    let mut list = LightList::new();
    let key = list.add(white_point());

    assert!(list.remove(key));
    assert!(list.is_empty());
    assert!(list.get(key).is_none());

    // Second removal of the same key is a no-op
    assert!(!list.remove(key));
}

#[test]
fn test_keys_stay_valid_after_other_removals() {
    let mut list = LightList::new();
    let a = list.add(white_point());
    let b = list.add(Light::ambient(Vec3::ONE, 0.5));
    let c = list.add(white_point());

    assert!(list.remove(b));
    assert!(list.get(a).is_some());
    assert!(list.get(c).is_some());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_removed_key_does_not_alias_new_light() {
    let mut list = LightList::new();
    let old = list.add(white_point());
    list.remove(old);

    let _new = list.add(white_point());
    // Slot reuse must not resurrect the old key
    assert!(list.get(old).is_none());
}

// ============================================================================
// Iteration / clear
// ============================================================================

#[test]
fn test_iter_yields_all_lights() {
    let mut list = LightList::new();
    list.add(white_point());
    list.add(Light::ambient(Vec3::ONE, 1.0));

    assert_eq!(list.iter().count(), 2);
    assert_eq!(list.keys().count(), 2);
}

#[test]
fn test_clear() {
    let mut list = LightList::new();
    list.add(white_point());
    list.add(white_point());
    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
}
