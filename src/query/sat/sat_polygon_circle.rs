use crate::math::Vector;
use crate::query::sat::{orient_from_b_to_a, MinOverlapAxis};
use crate::query::Collision;
use crate::shape::{Circle, Polygon};

/// The axis going from the center of `circle` toward the closest vertex of `polygon`.
///
/// A circle has no edges, so this is the only candidate separating axis it adds to the
/// polygon edge normals.
#[inline]
pub fn polygon_circle_closest_vertex_axis(polygon: &Polygon, circle: &Circle) -> Vector {
    let (closest, _) = circle.closest_polygon_vertex(polygon);
    (polygon.world_vertices()[closest] - circle.pos).norm()
}

/// Finds the first axis separating `polygon` and `circle`.
///
/// The polygon edge normals are tested first, then the closest-vertex axis.
/// Returns `None` if the shapes overlap.
pub fn find_separating_axis_polygon_circle(polygon: &Polygon, circle: &Circle) -> Option<Vector> {
    let separates = |axis: Vector| !polygon.project(axis).overlaps(&circle.project(axis));

    if let Some(axis) = polygon.axes().iter().copied().find(|axis| separates(*axis)) {
        return Some(axis);
    }

    let axis = polygon_circle_closest_vertex_axis(polygon, circle);
    separates(axis).then_some(axis)
}

/// Computes the collision between a convex polygon and a circle.
///
/// The normal points from the center of `circle` toward the centroid of `polygon`.
/// `a_in_b` is set when every vertex of `polygon` lies inside `circle`.
///
/// Detecting whether `circle` lies inside `polygon` is not implemented: `b_in_a` is
/// always `false`.
pub fn intersects_polygon_circle(polygon: &Polygon, circle: &Circle) -> Option<Collision> {
    let mut best = MinOverlapAxis::new(polygon.centroid() - circle.pos);

    for axis in polygon.axes() {
        let proj1 = polygon.project(*axis);
        let proj2 = circle.project(*axis);

        if !best.test(*axis, &proj1, &proj2) {
            return None;
        }
    }

    let axis = polygon_circle_closest_vertex_axis(polygon, circle);
    if !best.test(axis, &polygon.project(axis), &circle.project(axis)) {
        return None;
    }

    let normal = orient_from_b_to_a(best.normal, polygon.centroid(), circle.pos);
    let a_in_b = polygon
        .world_vertices()
        .iter()
        .all(|vertex| circle.contains_point(*vertex));

    Some(Collision::new(normal, best.overlap, a_in_b, false))
}

/// Computes the collision between a circle and a convex polygon.
///
/// This is [`intersects_polygon_circle`] with the roles of both shapes swapped: the
/// normal points from the centroid of `polygon` toward the center of `circle`, and
/// `b_in_a` is set when every vertex of `polygon` lies inside `circle`. `a_in_b` is
/// always `false`.
#[inline]
pub fn intersects_circle_polygon(circle: &Circle, polygon: &Polygon) -> Option<Collision> {
    intersects_polygon_circle(polygon, circle).map(|collision| collision.flipped())
}
