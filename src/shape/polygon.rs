use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use na::UnitComplex;

/// Indicates an invalid description of a collision polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonBuilderError {
    /// A collision polygon must contain at least three points.
    #[error("a collision polygon must contain at least three points.")]
    TooFewPoints,
    /// The rectangle fast-path requires parallel opposite edges.
    #[error(
        "a polygon flagged as a rectangle must have an even number of edges \
         forming parallel opposite pairs."
    )]
    MismatchedRectangleEdges,
}

/// A convex polygon tracking a moving game entity.
///
/// The polygon owns an ordered list of vertices in its local model space
/// (given at scale 1) and the derived edge vectors between consecutive
/// vertices. Scale and rotation are applied incrementally to the stored
/// points, so the original coordinates are not retained; a world-space
/// `origin` translation is applied at query time instead of being baked into
/// the points.
///
/// An axis-aligned bounding box over `points + origin` is cached and lazily
/// recomputed: every mutation marks it stale, and [`Polygon::aabb`] refreshes
/// it on demand.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide2d::shape::Polygon;
///
/// let mut poly = Polygon::from_rect(0.0, 0.0, 10.0, 20.0);
/// assert_eq!(poly.aabb().extents(), collide2d::na::Vector2::new(10.0, 20.0));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Polygon {
    points: Vec<Point>,
    edges: Vec<Vector>,
    is_rectangle: bool,
    scale: Real,
    rotation: Real,
    origin: Vector,
    aabb: Aabb,
    aabb_is_dirty: bool,
}

impl Polygon {
    /// Creates a new collision polygon from an ordered list of vertices.
    ///
    /// The vertices must be given at scale 1, in a fixed winding order; two
    /// consecutive vertices determine an edge, with the last edge closing the
    /// loop back to the first vertex. Convexity of the input is not checked.
    ///
    /// A `scale` other than 1 is applied immediately, as if by
    /// [`Polygon::set_scale`].
    ///
    /// Passing `is_rectangle = true` lets the intersection test consider only
    /// half of the edges, since the other half spans the same axes. The flag
    /// is validated here: the polygon must have an even number of edges with
    /// every edge parallel to the opposite one.
    pub fn new(
        points: Vec<Point>,
        scale: Real,
        is_rectangle: bool,
    ) -> Result<Self, PolygonBuilderError> {
        if points.len() < 3 {
            return Err(PolygonBuilderError::TooFewPoints);
        }

        let mut result = Self::from_parts(points, is_rectangle);

        if is_rectangle {
            result.check_rectangle_edges()?;
        }

        result.set_scale(scale);
        Ok(result)
    }

    /// Approximates a circle with a regular polygon inscribed in it.
    ///
    /// More points mean a tighter approximation but a slower intersection
    /// test. At least 4 points are used; smaller values are clamped. With
    /// exactly 4 points the result takes the rectangle fast path.
    pub fn from_circle(center: Point, radius: Real, num_points: usize) -> Self {
        let num_points = num_points.max(4);
        let step = Real::to_radians(360.0) / num_points as Real;
        let points = (0..num_points)
            .map(|i| {
                let (sin, cos) = (step * i as Real).sin_cos();
                Point::new(center.x + cos * radius, center.y + sin * radius)
            })
            .collect();
        Self::from_parts(points, num_points == 4)
    }

    /// Approximates an ellipse with an inscribed polygon.
    ///
    /// The per-axis radii are half of `width` and `height`. At least 4 points
    /// are required; smaller values fall back to the default of 6. With
    /// exactly 4 points the result takes the rectangle fast path.
    pub fn from_ellipse(center: Point, width: Real, height: Real, num_points: usize) -> Self {
        let num_points = if num_points >= 4 { num_points } else { 6 };
        let rx = width / 2.0;
        let ry = height / 2.0;
        let step = Real::to_radians(360.0) / num_points as Real;
        let points = (0..num_points)
            .map(|i| {
                let (sin, cos) = (step * i as Real).sin_cos();
                Point::new(center.x + cos * rx, center.y + sin * ry)
            })
            .collect();
        Self::from_parts(points, num_points == 4)
    }

    /// Creates an exact axis-aligned rectangle, flagged for the rectangle
    /// fast path.
    pub fn from_rect(x: Real, y: Real, width: Real, height: Real) -> Self {
        let points = vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ];
        Self::from_parts(points, true)
    }

    // Infallible constructor for vertex lists whose validity is established
    // by the caller.
    fn from_parts(points: Vec<Point>, is_rectangle: bool) -> Self {
        let mut result = Polygon {
            edges: vec![Vector::zeros(); points.len()],
            points,
            is_rectangle,
            scale: 1.0,
            rotation: 0.0,
            origin: Vector::zeros(),
            aabb: Aabb::new_invalid(),
            aabb_is_dirty: true,
        };
        result.recompute_edges();
        result
    }

    fn check_rectangle_edges(&self) -> Result<(), PolygonBuilderError> {
        let edges = &self.edges;
        if edges.len() % 2 != 0 {
            return Err(PolygonBuilderError::MismatchedRectangleEdges);
        }

        let eps = DEFAULT_EPSILON.sqrt();
        let half = edges.len() / 2;
        for i in 0..half {
            let e1 = &edges[i];
            let e2 = &edges[i + half];
            if !relative_eq!(e1.perp(e2), 0.0, epsilon = eps * e1.norm() * e2.norm()) {
                return Err(PolygonBuilderError::MismatchedRectangleEdges);
            }
        }

        Ok(())
    }

    /// The vertices of this polygon, in local space.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The edge vectors between consecutive vertices, the last one closing
    /// the loop.
    #[inline]
    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    /// Whether the intersection test may skip the second half of the edges.
    #[inline]
    pub fn is_rectangle(&self) -> bool {
        self.is_rectangle
    }

    /// The current scale relative to the vertex list this polygon was built
    /// from.
    #[inline]
    pub fn scale(&self) -> Real {
        self.scale
    }

    /// The current cumulative rotation of this polygon, in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The world-space origin of this polygon.
    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Rescales this polygon in place.
    ///
    /// The points are multiplied by the ratio between `scale` and the current
    /// scale, so the original vertex list does not need to be kept around.
    /// Does nothing when `scale` equals the current scale or is NaN.
    pub fn set_scale(&mut self, scale: Real) {
        if scale == self.scale || scale.is_nan() {
            return;
        }

        let ratio = scale / self.scale;
        self.scale = scale;

        for pt in &mut self.points {
            pt.coords *= ratio;
        }

        self.recompute_edges();
        self.aabb_is_dirty = true;
    }

    /// Sets the cumulative rotation of this polygon, in degrees.
    ///
    /// Only the delta from the previous rotation is applied, to the already
    /// transformed points (counter-clockwise positive, about the local
    /// origin). Repeated small deltas accumulate floating-point error over
    /// long lifetimes; use [`Polygon::reset_positioning`] to return to the
    /// untransformed orientation. Does nothing when `degrees` equals the
    /// current rotation or is NaN.
    pub fn set_rotation(&mut self, degrees: Real) {
        if degrees == self.rotation || degrees.is_nan() {
            return;
        }

        let rot = UnitComplex::new((degrees - self.rotation).to_radians());
        self.rotation = degrees;

        for pt in &mut self.points {
            *pt = rot * *pt;
        }

        self.recompute_edges();
        self.aabb_is_dirty = true;
    }

    /// Moves the origin of this polygon in world space.
    ///
    /// The translation is applied at query time; the local points are left
    /// untouched.
    #[inline]
    pub fn set_origin(&mut self, origin: Vector) {
        self.origin = origin;
        self.aabb_is_dirty = true;
    }

    /// Resets the origin and rotation of this polygon. The scale is kept.
    pub fn reset_positioning(&mut self) {
        self.origin = Vector::zeros();
        self.set_rotation(0.0);
        self.aabb_is_dirty = true;
    }

    /// The world-space bounding box of this polygon, recomputed first if any
    /// mutation left it stale.
    pub fn aabb(&mut self) -> Aabb {
        if self.aabb_is_dirty {
            let origin = self.origin;
            self.aabb = Aabb::from_points(self.points.iter().map(|pt| pt + origin));
            self.aabb_is_dirty = false;
        }

        self.aabb
    }

    fn recompute_edges(&mut self) {
        let n = self.points.len();
        for i in 0..n {
            self.edges[i] = self.points[(i + 1) % n] - self.points[i];
        }
    }
}
