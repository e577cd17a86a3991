use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::Polygon;
use na::Unit;

/// Searches the edge normals of both polygons for an axis separating their
/// world-space projections.
///
/// Returns `true` as soon as one axis with a positive separation is found:
/// the polygons are provably disjoint. Returns `false` when no tested axis
/// separates them, which for convex polygons means they overlap (boundary
/// contact included).
pub fn polygon_polygon_separating_axis_exists(poly1: &Polygon, poly2: &Polygon) -> bool {
    for edge in candidate_edges(poly1).iter().chain(candidate_edges(poly2)) {
        let axis = match Unit::try_new(Vector::new(-edge.y, edge.x), DEFAULT_EPSILON) {
            Some(axis) => axis,
            None => {
                // A zero-length edge spans no axis and can never separate.
                log::debug!("Skipping degenerate polygon edge during the SAT test.");
                continue;
            }
        };

        let (min1, max1) = project_polygon_on_axis(&axis, poly1);
        let (min2, max2) = project_polygon_on_axis(&axis, poly2);

        let separation = if min1 < min2 { min2 - max1 } else { min1 - max2 };
        if separation > 0.0 {
            return true;
        }
    }

    false
}

// A rectangle's second half of edges is parallel to the first and would only
// repeat the same axes.
fn candidate_edges(poly: &Polygon) -> &[Vector] {
    let edges = poly.edges();
    if poly.is_rectangle() {
        &edges[..edges.len() / 2]
    } else {
        edges
    }
}

// Projects the polygon's vertices, translated by its origin, onto the axis,
// as a `[min, max]` interval.
fn project_polygon_on_axis(axis: &UnitVector, poly: &Polygon) -> (Real, Real) {
    let origin = poly.origin();
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for pt in poly.points() {
        let dot = axis.dot(&(pt.coords + origin));
        min = min.min(dot);
        max = max.max(dot);
    }

    (min, max)
}
