use crate::math::Point;
use crate::shape::Polygon;

/// Computes the intersection point between two segments `[a1, a2]` and
/// `[b1, b2]`.
///
/// The segments are solved in parametric form; an intersection exists iff
/// both parameters land in `[0, 1]`, endpoints included. Parallel or
/// degenerate segments make the divisor vanish, so the parameters come out
/// infinite or NaN and fail the range checks: such pairs return `None`
/// without being special-cased, which keeps near-parallel near-misses and
/// collinear overlaps on the same code path.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide2d::na::Point2;
/// use collide2d::query;
///
/// let pt = query::segments_intersection(
///     &Point2::new(0.0, 0.0),
///     &Point2::new(10.0, 10.0),
///     &Point2::new(0.0, 10.0),
///     &Point2::new(10.0, 0.0),
/// );
/// assert_eq!(pt, Some(Point2::new(5.0, 5.0)));
/// # }
/// ```
pub fn segments_intersection(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> Option<Point> {
    let d1 = a2 - a1;
    let d2 = b2 - b1;

    let inv_denom = 1.0 / d1.perp(&d2);
    let s = (-d1.y * (a1.x - b1.x) + d1.x * (a1.y - b1.y)) * inv_denom;
    let t = (d2.x * (a1.y - b1.y) - d2.y * (a1.x - b1.x)) * inv_denom;

    if s >= 0.0 && s <= 1.0 && t >= 0.0 && t <= 1.0 {
        Some(a1 + d1 * t)
    } else {
        None
    }
}

/// Computes the intersection between the segment `[a1, a2]` and the
/// world-space edges of a polygon.
///
/// The polygon's edges are walked in order and the first intersection found
/// is returned, which is not guaranteed to be the one nearest to `a1`. A
/// segment lying entirely inside the polygon crosses no edge and returns
/// `None`.
pub fn segment_polygon_intersection(a1: &Point, a2: &Point, poly: &Polygon) -> Option<Point> {
    let origin = poly.origin();
    let points = poly.points();

    for i in 0..points.len() {
        let b1 = points[i] + origin;
        let b2 = points[(i + 1) % points.len()] + origin;

        if let Some(pt) = segments_intersection(a1, a2, &b1, &b2) {
            return Some(pt);
        }
    }

    None
}
