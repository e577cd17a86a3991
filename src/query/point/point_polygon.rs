use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::Polygon;

impl PointQuery for Polygon {
    /// Tests the point against the polygon's vertices translated by its
    /// origin, using even-odd ray casting.
    ///
    /// The strict comparisons give edges a half-open convention: a point
    /// exactly on a vertex or an edge may be reported on either side, and
    /// horizontal edges never register a crossing. This matches the usual
    /// ray-casting behavior and is a documented policy rather than a bug.
    fn contains_point(&self, pt: &Point) -> bool {
        let origin = self.origin();
        let points = self.points();
        let mut inside = false;

        let mut j = points.len() - 1;
        for i in 0..points.len() {
            let pi = points[i] + origin;
            let pj = points[j] + origin;

            if (pi.y > pt.y) != (pj.y > pt.y)
                && pt.x < (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }

            j = i;
        }

        inside
    }
}
