use crate::math::Vector;
use crate::query::sat::{orient_from_b_to_a, Containment, MinOverlapAxis};
use crate::query::Collision;
use crate::shape::Polygon;

/// Finds the first edge normal of `poly1` or `poly2` separating the two polygons.
///
/// Returns `None` if the polygons overlap.
pub fn find_separating_axis_polygon_polygon(poly1: &Polygon, poly2: &Polygon) -> Option<Vector> {
    poly1
        .axes()
        .iter()
        .chain(poly2.axes())
        .copied()
        .find(|axis| !poly1.project(*axis).overlaps(&poly2.project(*axis)))
}

/// Computes the collision between two convex polygons.
///
/// Returns `None` as soon as a separating edge normal is found. Otherwise the edge
/// normal with the smallest overlap depth becomes the collision normal, oriented from
/// the centroid of `poly2` toward the centroid of `poly1`.
///
/// `a_in_b` (resp. `b_in_a`) is set if the projection of `poly2` (resp. `poly1`)
/// strictly encloses the other one on every edge normal.
///
/// Edge normals tying for the smallest overlap are ranked the same way whatever the
/// argument order, so swapping `poly1` and `poly2` negates the normal.
pub fn intersects_polygon_polygon(poly1: &Polygon, poly2: &Polygon) -> Option<Collision> {
    let mut best = MinOverlapAxis::new(poly1.centroid() - poly2.centroid());
    let mut containment = Containment::new();

    for axis in poly1.axes().iter().chain(poly2.axes()) {
        let proj1 = poly1.project(*axis);
        let proj2 = poly2.project(*axis);

        if !best.test(*axis, &proj1, &proj2) {
            return None;
        }

        containment.update(&proj1, &proj2);
    }

    let normal = orient_from_b_to_a(best.normal, poly1.centroid(), poly2.centroid());

    Some(Collision::new(
        normal,
        best.overlap,
        containment.a_in_b,
        containment.b_in_a,
    ))
}
