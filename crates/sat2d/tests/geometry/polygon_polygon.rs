use sat2d::math::Vector;
use sat2d::query::{self, Sat};
use sat2d::shape::{Polygon, Shape};

fn square(side: f64, pos: Vector) -> Polygon {
    Polygon::new(
        vec![
            Vector::new(0.0, 0.0),
            Vector::new(side, 0.0),
            Vector::new(side, side),
            Vector::new(0.0, side),
        ],
        pos,
    )
    .unwrap()
}

fn triangle(pos: Vector) -> Polygon {
    Polygon::new(
        vec![
            Vector::new(0.0, 0.0),
            Vector::new(30.0, 0.0),
            Vector::new(0.0, 30.0),
        ],
        pos,
    )
    .unwrap()
}

#[test]
fn test_square_triangle_overlap() {
    let square = square(40.0, Vector::origin());
    let triangle = triangle(Vector::new(30.0, 0.0));

    let collision = Sat.intersects(&square, &triangle).unwrap();
    assert_eq!(collision.overlap, 10.0);
    assert_eq!(collision.normal, Vector::new(-1.0, 0.0));
}

#[test]
fn test_square_square_overlap() {
    let a = square(40.0, Vector::origin());
    let b = square(40.0, Vector::new(30.0, 0.0));

    let collision = Sat.intersects(&a, &b).unwrap();
    assert_eq!(collision.overlap, 10.0);
    assert!(!collision.a_in_b);
    assert!(!collision.b_in_a);
}

#[test]
fn test_separated_polygons() {
    let a = square(40.0, Vector::origin());

    assert!(Sat.intersects(&a, &square(40.0, Vector::new(50.0, 0.0))).is_none());
    assert!(Sat.intersects(&a, &triangle(Vector::new(50.0, 0.0))).is_none());
    assert!(!query::collides(&a, &triangle(Vector::new(50.0, 0.0))));
}

#[test]
fn test_swapping_arguments_flips_the_collision() {
    let a = square(40.0, Vector::origin());
    let b = triangle(Vector::new(30.0, 5.0));

    let ab = Sat.intersects(&a, &b).unwrap();
    let ba = Sat.intersects(&b, &a).unwrap();

    assert_eq!(ab.overlap, ba.overlap);
    assert_relative_eq!(ab.normal, -ba.normal);
    assert_eq!(ab.a_in_b, ba.b_in_a);
    assert_eq!(ab.b_in_a, ba.a_in_b);
}

#[test]
fn test_small_square_inside_big_square() {
    let big = square(40.0, Vector::origin());
    let mut small = square(10.0, Vector::new(15.0, 15.0));

    let collision = Sat.intersects(&big, &small).unwrap();
    assert!(collision.b_in_a);
    assert!(!collision.a_in_b);

    let collision = Sat.intersects(&small, &big).unwrap();
    assert!(collision.a_in_b);
    assert!(!collision.b_in_a);

    // Straddling the right side of the big square.
    small.set_pos(Vector::new(35.0, 15.0));
    let collision = Sat.intersects(&big, &small).unwrap();
    assert!(!collision.b_in_a);
    assert!(!collision.a_in_b);
    assert_eq!(collision.overlap, 5.0);

    small.set_pos(Vector::new(100.0, 100.0));
    assert!(Sat.intersects(&big, &small).is_none());
}

#[test]
fn test_moving_polygon_between_queries() {
    let a = square(40.0, Vector::origin());
    let mut b = square(40.0, Vector::new(30.0, 0.0));
    assert!(Sat.collides(&a, &b));

    // Forward then back within the same frame.
    b.set_pos(Vector::new(80.0, 0.0));
    assert!(!Sat.collides(&a, &b));
    b.set_pos(Vector::new(30.0, 0.0));
    assert_eq!(Sat.intersects(&a, &b).unwrap().overlap, 10.0);
}
