//! Browser-side checks for the JS-facing error conversion.
#![cfg(target_arch = "wasm32")]

use physics_simulator::{Force, World};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn invalid_dimensions_throw() {
    let err = World::new(0.0, 0.0, 100.0).err().expect("zero width must fail");
    let msg = err.as_string().expect("error is a string");
    assert!(msg.contains("dimensions"));
}

#[wasm_bindgen_test]
fn malformed_force_edit_throws_and_keeps_value() {
    let mut world = World::new(0.0, 100.0, 100.0).unwrap();
    world.add_force(Force::new("g".into(), 0.0, 1.0)).unwrap();

    let err = world.change_force_y(0, "1.2.3").err().expect("bad number must fail");
    assert_eq!(err.as_string().as_deref(), Some("`1.2.3` is not a finite number"));
    assert_eq!(world.get_global_forces()[0].y(), 1.0);

    assert!(world.change_force_x(3, "1").is_err());
}

#[wasm_bindgen_test]
fn non_finite_force_throws() {
    let mut world = World::new(0.0, 100.0, 100.0).unwrap();
    let err = world.add_force(Force::new("bad".into(), 0.0, f32::NAN)).err().expect("NaN must fail");
    assert_eq!(err.as_string().as_deref(), Some("`NaN` is not a finite number"));
    assert_eq!(world.force_count(), 0);
}
