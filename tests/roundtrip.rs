//! Roundtrip (serialize-deserialize) tests for vectors.

use trivec::{Element, Vector};

fn roundtrip(vector: Vector) {
    let element = vector.to_element("vector");
    assert_eq!(vector, Vector::from_element(&element));

    let mut reset = Vector::new(9., 9., 9.);
    reset.set_from_element(&element);
    assert_eq!(vector, reset);
}

#[test]
fn zero() {
    roundtrip(Vector::default());
}

#[test]
fn simple() {
    roundtrip(Vector::new(1., 2., 3.));
}

#[test]
fn fractional() {
    roundtrip(Vector::new(1.5, -2.25, 0.));
}

#[test]
fn unrepresentable_as_short_decimals() {
    roundtrip(Vector::new(0.1, 1. / 3., -12345.6789));
}

#[test]
fn tiny_and_huge() {
    roundtrip(Vector::new(1e-10, 4.9e15, -0.000123456789));
}

#[test]
fn through_document_tree() {
    let position = Vector::new(1.5, -2.25, 0.);
    let mut camera = Element::new("camera");
    camera.append_child(position.to_element("pos"));
    assert_eq!(
        "<camera><pos x=\"1.5\" y=\"-2.25\" z=\"0\" /></camera>",
        camera.to_string()
    );
    assert_eq!(position, Vector::from_element(&camera.children()[0]));
}

#[test]
fn stream_format() {
    let vector = Vector::new(1., -2., 3.5);
    let text = vector.to_string();
    assert_eq!("1\t-2\t3.5", text);
    assert_eq!(vector, text.parse().unwrap());
}
