use crate::query::sat;
use crate::shape::Polygon;

/// Tests whether two convex polygons are intersecting.
///
/// Boundary contact counts as an intersection: two polygons sharing only an
/// edge or a vertex are reported as intersecting.
///
/// Both polygons are borrowed mutably so their bounding boxes can be lazily
/// refreshed; this also keeps a polygon from being mutated concurrently with
/// a test against it.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide2d::query;
/// use collide2d::shape::Polygon;
///
/// let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
/// let mut b = Polygon::from_rect(5.0, 5.0, 10.0, 10.0);
/// assert!(query::intersection_test_polygon_polygon(&mut a, &mut b));
/// # }
/// ```
pub fn intersection_test_polygon_polygon(poly1: &mut Polygon, poly2: &mut Polygon) -> bool {
    // If the bounding boxes don't intersect, the polygons definitely don't.
    if !poly1.aabb().intersects(&poly2.aabb()) {
        return false;
    }

    !sat::polygon_polygon_separating_axis_exists(poly1, poly2)
}
