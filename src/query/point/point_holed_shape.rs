use crate::math::Point;
use crate::query::PointQuery;
use crate::shape::HoledShape;

impl<Outer: PointQuery, Hole: PointQuery> PointQuery for HoledShape<Outer, Hole> {
    /// A point is inside a holed shape when the outer shape contains it and
    /// the hole does not.
    fn contains_point(&self, pt: &Point) -> bool {
        self.outer.contains_point(pt) && !self.hole.contains_point(pt)
    }
}
