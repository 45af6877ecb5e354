// tests/serialization_tests.rs
#![cfg(feature = "serde")]

use lie_engine::root_system::{
    affine_dynkin_diagram, AmbientSpace, CartanType, RootSystem, TypeE, Vec8,
};

fn ambient(rank: usize) -> AmbientSpace {
    RootSystem::new(CartanType::finite('E', rank))
        .ambient_space()
        .unwrap()
}

#[test]
fn ambient_space_round_trip_before_enumeration() {
    for rank in 6..=8 {
        let e = ambient(rank);
        let json = serde_json::to_string(&e).unwrap();
        let back: AmbientSpace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
        assert!(!back.positive_roots_computed());
    }
}

#[test]
fn ambient_space_round_trip_keeps_root_cache() {
    for rank in 6..=8 {
        let e = ambient(rank);
        e.positive_roots();
        let json = serde_json::to_string(&e).unwrap();
        let back: AmbientSpace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
        assert!(back.positive_roots_computed());
        assert_eq!(back.positive_roots(), e.positive_roots());
    }
}

#[test]
fn tampered_base_is_rejected() {
    let e = ambient(6);
    let mut value = serde_json::to_value(&e).unwrap();
    let swapped = serde_json::to_value(Vec8::basis(0)).unwrap();
    value["base"][1] = swapped;
    let result: Result<AmbientSpace, _> = serde_json::from_value(value);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("do not match the E6 base"), "{}", err);
}

#[test]
fn tampered_root_cache_is_rejected() {
    let e = ambient(6);
    e.positive_roots();
    let mut value = serde_json::to_value(&e).unwrap();
    let first = value["positive_roots"][0].take();
    let second = value["positive_roots"][1].take();
    value["positive_roots"][0] = second;
    value["positive_roots"][1] = first;
    let result: Result<AmbientSpace, _> = serde_json::from_value(value);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("do not match the E6 enumeration"), "{}", err);
}

#[test]
fn integer_base_ring_is_rejected() {
    let mut value = serde_json::to_value(ambient(8)).unwrap();
    assert_eq!(value["base_ring"], serde_json::json!("Rationals"));
    value["base_ring"] = serde_json::json!("Integers");
    let err = serde_json::from_value::<AmbientSpace>(value)
        .unwrap_err()
        .to_string();
    assert!(err.contains("Integer Ring cannot hold"), "{}", err);
}

#[test]
fn mismatched_flavor_is_rejected() {
    let mut value = serde_json::to_value(ambient(7)).unwrap();
    value["flavor"] = serde_json::to_value(TypeE::E8).unwrap();
    assert!(serde_json::from_value::<AmbientSpace>(value).is_err());
}

#[test]
fn vectors_and_diagrams_round_trip() {
    let v = Vec8::from_halves([1, -1, -1, -1, -1, -1, -1, 1]);
    let back: Vec8 = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
    assert_eq!(back, v);

    let g = affine_dynkin_diagram(&CartanType::affine('E', 7, 1)).unwrap();
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(serde_json::from_str::<lie_engine::root_system::DynkinDiagram>(&json).unwrap(), g);
}
