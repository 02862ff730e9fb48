use crate::math::{Point2, Projection, Real, Vector};
use crate::shape::ShapeError;

/// A 2D convex polygon.
///
/// Vertices are stored relative to the polygon position and must describe a
/// convex polyline with a consistent winding. Convexity is not checked.
///
/// The world-space vertices, the edge axes and the centroid are derived data kept
/// up to date by the setters: axes are recomputed when the vertices change, world
/// vertices and centroid when the position changes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "PolygonDesc", into = "PolygonDesc")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) pos: Vector,
    vertices: Vec<Vector>,
    world_vertices: Vec<Vector>,
    axes: Vec<Vector>,
    centroid: Vector,
}

/// The serialized form of a [`Polygon`]: only its position and relative vertices.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
pub struct PolygonDesc {
    pos: Vector,
    vertices: Vec<Vector>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<PolygonDesc> for Polygon {
    type Error = ShapeError;

    fn try_from(desc: PolygonDesc) -> Result<Self, ShapeError> {
        Polygon::new(desc.vertices, desc.pos)
    }
}

#[cfg(feature = "serde-serialize")]
impl From<Polygon> for PolygonDesc {
    fn from(polygon: Polygon) -> Self {
        PolygonDesc {
            pos: polygon.pos,
            vertices: polygon.vertices,
        }
    }
}

impl Polygon {
    /// Creates a new polygon from vertices expressed relative to `pos`.
    ///
    /// Fails if less than three vertices are given.
    pub fn new(vertices: Vec<Vector>, pos: Vector) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::NotEnoughVertices {
                count: vertices.len(),
            });
        }

        Ok(Self::from_checked_vertices(vertices, pos))
    }

    /// Creates a new polygon from nalgebra points expressed relative to `pos`.
    pub fn from_points(points: &[Point2], pos: Vector) -> Result<Self, ShapeError> {
        Self::new(points.iter().map(|pt| Vector::from(*pt)).collect(), pos)
    }

    /// Creates the axis-aligned rectangle `(0, 0), (width, 0), (width, height), (0, height)`
    /// placed at `pos`.
    pub fn new_box(width: Real, height: Real, pos: Vector) -> Self {
        let vertices = vec![
            Vector::new(0.0, 0.0),
            Vector::new(width, 0.0),
            Vector::new(width, height),
            Vector::new(0.0, height),
        ];

        Self::from_checked_vertices(vertices, pos)
    }

    // `vertices` must hold at least three points.
    fn from_checked_vertices(vertices: Vec<Vector>, pos: Vector) -> Self {
        let mut result = Polygon {
            pos,
            world_vertices: Vec::with_capacity(vertices.len()),
            axes: Vec::with_capacity(vertices.len()),
            vertices,
            centroid: pos,
        };
        result.update_axes();
        result.update_world_geometry();
        result
    }

    /// The vertices of this polygon, relative to its position.
    #[inline]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Replaces the relative vertices of this polygon.
    ///
    /// Fails, leaving the polygon untouched, if less than three vertices are given.
    pub fn set_vertices(&mut self, vertices: Vec<Vector>) -> Result<(), ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::NotEnoughVertices {
                count: vertices.len(),
            });
        }

        self.vertices = vertices;
        self.update_axes();
        self.update_world_geometry();
        Ok(())
    }

    /// The vertices of this polygon in world-space.
    #[inline]
    pub fn world_vertices(&self) -> &[Vector] {
        &self.world_vertices
    }

    /// One unit normal per edge, edge `i` going from vertex `i` to vertex `i + 1`.
    ///
    /// Each axis is the edge rotated by a quarter turn counter-clockwise, so it points
    /// outward for clockwise polygons (in a y-up frame) and inward otherwise. The
    /// separating axis test only cares about the direction line, not its orientation.
    #[inline]
    pub fn axes(&self) -> &[Vector] {
        &self.axes
    }

    /// The arithmetic mean of the world-space vertices.
    ///
    /// This is not the area centroid, but it lies strictly inside any non-degenerate
    /// convex polygon which is all the collision algorithms need.
    #[inline]
    pub fn centroid(&self) -> Vector {
        self.centroid
    }

    /// Projects this polygon onto the unit vector `axis`.
    pub fn project(&self, axis: Vector) -> Projection {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for vertex in &self.world_vertices {
            let dot = vertex.dot(axis);
            min = min.min(dot);
            max = max.max(dot);
        }

        Projection { min, max }
    }

    fn update_axes(&mut self) {
        let n = self.vertices.len();
        self.axes.clear();

        for i1 in 0..n {
            let i2 = (i1 + 1) % n;
            let edge = self.vertices[i2] - self.vertices[i1];

            if edge.mag_squared() == 0.0 {
                log::trace!("polygon edge {} has zero length, its axis defaults to (0, 1).", i1);
            }

            self.axes.push(edge.perp().norm());
        }
    }

    pub(crate) fn update_world_geometry(&mut self) {
        let pos = self.pos;
        self.world_vertices.clear();
        self.world_vertices.extend(self.vertices.iter().map(|v| pos + *v));

        let mut sum = Vector::origin();
        for vertex in &self.world_vertices {
            sum += *vertex;
        }
        self.centroid = sum / self.world_vertices.len() as Real;
    }
}
