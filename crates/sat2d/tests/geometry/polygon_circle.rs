use sat2d::math::Vector;
use sat2d::query::sat::{intersects_circle_circle, intersects_polygon_circle};
use sat2d::query::Sat;
use sat2d::shape::{Circle, Polygon};
use std::f64::consts::PI;

/// A regular polygon inscribed in the circle of the given radius, with a vertex at angle 0.
fn regular_polygon(nsides: usize, radius: f64, pos: Vector) -> Polygon {
    let vertices = (0..nsides)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / nsides as f64;
            Vector::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices, pos).unwrap()
}

#[test]
fn test_box_circle_overlap() {
    let square = Polygon::new_box(40.0, 40.0, Vector::origin());
    let circle = Circle::new(20.0, Vector::new(20.0, 20.0)).unwrap();
    assert!(Sat.intersects(&square, &circle).is_some());

    let circle = Circle::new(20.0, Vector::new(80.0, 0.0)).unwrap();
    assert!(Sat.intersects(&square, &circle).is_none());
    assert!(Sat.intersects(&circle, &square).is_none());
}

#[test]
fn test_circle_polygon_is_flipped_polygon_circle() {
    let square = Polygon::new_box(40.0, 40.0, Vector::origin());
    let circle = Circle::new(15.0, Vector::new(50.0, 20.0)).unwrap();

    let pc = Sat.intersects(&square, &circle).unwrap();
    let cp = Sat.intersects(&circle, &square).unwrap();

    assert_eq!(pc.overlap, 5.0);
    assert_eq!(cp.overlap, 5.0);
    assert_eq!(pc.normal, Vector::new(-1.0, 0.0));
    assert_eq!(cp.normal, Vector::new(1.0, 0.0));
    assert_eq!(pc.a_in_b, cp.b_in_a);
    assert_eq!(pc.b_in_a, cp.a_in_b);
}

#[test]
fn test_fine_polygon_behaves_like_a_circle() {
    let ball = Circle::new(20.0, Vector::origin()).unwrap();
    let polygon = regular_polygon(128, 20.0, Vector::origin());
    let other = Circle::new(20.0, Vector::new(30.0, 0.0)).unwrap();

    let exact = intersects_circle_circle(&ball, &other).unwrap();
    let approx = intersects_polygon_circle(&polygon, &other).unwrap();

    assert_relative_eq!(exact.overlap, 10.0);
    assert_relative_eq!(approx.overlap, exact.overlap, epsilon = 1.0e-2);
    assert_relative_eq!(approx.normal, exact.normal, epsilon = 1.0e-2);

    let swapped = Sat.intersects(&other, &polygon).unwrap();
    let exact_swapped = intersects_circle_circle(&other, &ball).unwrap();
    assert_relative_eq!(swapped.overlap, exact_swapped.overlap, epsilon = 1.0e-2);
    assert_relative_eq!(swapped.normal, exact_swapped.normal, epsilon = 1.0e-2);
}

#[test]
fn test_polygon_inside_circle() {
    let polygon = regular_polygon(6, 5.0, Vector::new(1.0, 1.0));
    let circle = Circle::new(10.0, Vector::origin()).unwrap();

    let collision = Sat.intersects(&polygon, &circle).unwrap();
    assert!(collision.a_in_b);
    assert!(!collision.b_in_a);

    let collision = Sat.intersects(&circle, &polygon).unwrap();
    assert!(!collision.a_in_b);
    assert!(collision.b_in_a);
}
