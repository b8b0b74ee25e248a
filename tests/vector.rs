//! Vector integration tests.

#![allow(clippy::float_cmp)]

use deckplane::Vector;

#[test]
fn addition_is_componentwise() {
    let sum = Vector::new(4.0, 3.0) + Vector::new(3.0, 1.0);
    assert_eq!(sum, Vector::new(7.0, 4.0));
}

#[test]
fn scaling_multiplies_both_components() {
    assert_eq!(Vector::new(4.0, 3.0) * 3.0, Vector::new(12.0, 9.0));
    assert_eq!(Vector::new(4.0, 3.0).scale(3.0), Vector::new(12.0, 9.0));
    assert_eq!(Vector::new(1.5, -2.0) * -2.0, Vector::new(-3.0, 4.0));
}

#[test]
fn magnitude_is_the_euclidean_norm() {
    assert_eq!(Vector::new(4.0, 3.0).magnitude(), 5.0);
    assert_eq!(Vector::new(0.0, 0.0).magnitude(), 0.0);
    assert_eq!(Vector::new(-4.0, 3.0).magnitude(), 5.0);
}

#[test]
fn only_the_zero_vector_is_zero() {
    assert!(!Vector::new(0.0, 0.0).is_nonzero());
    assert!(!Vector::default().is_nonzero());
    assert!(Vector::new(0.0, 0.0001).is_nonzero());
    assert!(Vector::new(-0.0001, 0.0).is_nonzero());
}

#[test]
fn display_uses_the_canonical_form() {
    assert_eq!(Vector::new(7.0, 4.0).to_string(), "Vector(7, 4)");
    assert_eq!(Vector::new(0.5, -1.25).to_string(), "Vector(0.5, -1.25)");
    assert_eq!(Vector::default().to_string(), "Vector(0, 0)");
}

#[test]
fn operations_return_new_values() {
    let v = Vector::new(4.0, 3.0);
    let _ = v + v;
    let _ = v * 2.0;
    assert_eq!(v, Vector::new(4.0, 3.0));
}
