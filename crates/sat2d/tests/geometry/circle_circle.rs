use sat2d::math::Vector;
use sat2d::query::Sat;
use sat2d::shape::{Circle, Shape};

#[test]
fn test_circles_overlap() {
    let a = Circle::new(20.0, Vector::new(70.0, 0.0)).unwrap();
    let b = Circle::new(20.0, Vector::new(80.0, 0.0)).unwrap();
    assert!(Sat.intersects(&a, &b).is_some());

    let b = Circle::new(20.0, Vector::new(100.0, 0.0)).unwrap();
    let collision = Sat.intersects(&a, &b).unwrap();
    assert_eq!(collision.overlap, 10.0);
}

#[test]
fn test_circles_apart() {
    let a = Circle::new(20.0, Vector::new(0.0, 0.0)).unwrap();
    let mut b = Circle::new(20.0, Vector::new(0.0, 41.0)).unwrap();
    assert!(Sat.intersects(&a, &b).is_none());

    b.translate(Vector::new(0.0, -1.0));
    let collision = Sat.intersects(&a, &b).unwrap();
    assert_eq!(collision.overlap, 0.0);
    assert_eq!(collision.normal, Vector::new(0.0, -1.0));
}

#[test]
fn test_circle_containment_is_symmetric() {
    let big = Circle::new(10.0, Vector::origin()).unwrap();
    let small = Circle::new(3.0, Vector::new(2.0, 2.0)).unwrap();

    let ab = Sat.intersects(&big, &small).unwrap();
    let ba = Sat.intersects(&small, &big).unwrap();

    assert!(ab.b_in_a && !ab.a_in_b);
    assert!(ba.a_in_b && !ba.b_in_a);
    assert_eq!(ab.overlap, ba.overlap);
    assert_eq!(ab.normal, -ba.normal);
}
