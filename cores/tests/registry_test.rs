use scanline_core::core::SimulatedCore;
use scanline_cores::registry;

#[test]
fn test_builtin_cores_are_registered() {
    let names: Vec<_> = registry::all().iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["bars", "pattern"]);
}

#[test]
fn test_registered_geometries_are_valid() {
    for entry in registry::all() {
        assert!(entry.geometry.validate().is_ok(), "{}", entry.name);
        assert!(!entry.description.is_empty());
    }
}

#[test]
fn test_find_creates_fresh_core() {
    let entry = registry::find("pattern").unwrap();
    let core = (entry.create)();
    assert_eq!(core.error_status(), 0);
    assert_eq!(core.buttons().bits(), 0);
    assert!(registry::find("julia").is_none());
}
