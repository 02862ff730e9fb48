use sat2d::math::Vector;
use sat2d::query::Sat;
use sat2d::shape::{Circle, Polygon, Shape};

#[test]
fn test_resolving_separates_polygons() {
    let mut a = Polygon::new_box(40.0, 40.0, Vector::origin());
    let b = Polygon::new_box(40.0, 40.0, Vector::new(30.0, 0.0));

    let collision = Sat.intersects(&a, &b).unwrap();
    collision.resolve(&mut a, 1.0);

    assert_eq!(a.pos(), Vector::new(-11.0, 0.0));
    assert!(Sat.intersects(&a, &b).is_none());
}

#[test]
fn test_resolving_separates_circle_from_polygon() {
    let mut circle = Circle::new(15.0, Vector::new(50.0, 20.0)).unwrap();
    let square = Polygon::new_box(40.0, 40.0, Vector::origin());

    let collision = Sat.intersects(&circle, &square).unwrap();
    collision.resolve(&mut circle, 0.5);

    assert_eq!(circle.pos(), Vector::new(55.5, 20.0));
    assert!(Sat.intersects(&circle, &square).is_none());
}

#[test]
fn test_resolving_through_trait_objects() {
    let mut shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(10.0, Vector::new(0.0, 0.0)).unwrap()),
        Box::new(Circle::new(10.0, Vector::new(0.0, 15.0)).unwrap()),
    ];

    let collision = Sat.intersects(&*shapes[1], &*shapes[0]).unwrap();
    assert_eq!(collision.translation(), Vector::new(0.0, 5.0));

    collision.resolve(&mut *shapes[1], 1.0);
    assert_eq!(shapes[1].pos(), Vector::new(0.0, 21.0));
    assert!(Sat.intersects(&*shapes[0], &*shapes[1]).is_none());
}
