#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new_stores_coordinates() {
    let p = Point::new(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_clone_and_copy() {
    let a = Point::new(1.0, 2.0);
    let b = a;
    assert_eq!(a, b);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(10.0, 20.0);
    assert_eq!(p.distance_to(p), 0.0);
}

#[test]
fn distance_pythagorean_triple() {
    let a = Point::new(50.0, 50.0);
    let b = Point::new(53.0, 54.0);
    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-3.0, 7.0);
    let b = Point::new(9.0, -1.0);
    assert_eq!(a.distance_to(b), b.distance_to(a));
}

#[test]
fn distance_handles_negative_coordinates() {
    let a = Point::new(-3.0, -4.0);
    let b = Point::new(0.0, 0.0);
    assert_eq!(a.distance_to(b), 5.0);
}
