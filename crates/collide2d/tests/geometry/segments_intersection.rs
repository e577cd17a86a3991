use approx::relative_eq;
use collide2d::query::{segment_polygon_intersection, segments_intersection};
use collide2d::shape::Polygon;
use nalgebra::{Point2, Vector2};

#[test]
fn crossing_diagonals() {
    let pt = segments_intersection(
        &Point2::new(0.0, 0.0),
        &Point2::new(10.0, 10.0),
        &Point2::new(0.0, 10.0),
        &Point2::new(10.0, 0.0),
    );
    assert_eq!(pt, Some(Point2::new(5.0, 5.0)));
}

#[test]
fn symmetric_under_segment_swap() {
    let a1 = Point2::new(-3.0, 1.0);
    let a2 = Point2::new(7.0, 2.5);
    let b1 = Point2::new(0.0, -4.0);
    let b2 = Point2::new(1.0, 6.0);

    let p1 = segments_intersection(&a1, &a2, &b1, &b2).unwrap();
    let p2 = segments_intersection(&b1, &b2, &a1, &a2).unwrap();
    assert!(relative_eq!(p1, p2, epsilon = 1.0e-5));
}

#[test]
fn parallel_segments_do_not_intersect() {
    assert_eq!(
        segments_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(1.0, 1.0),
        ),
        None
    );
}

#[test]
fn collinear_overlap_is_reported_as_no_intersection() {
    // Collinear segments zero out both the divisor and the numerators; the
    // resulting NaN parameters fail the range checks.
    assert_eq!(
        segments_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(6.0, 0.0),
        ),
        None
    );
}

#[test]
fn touching_endpoints_intersect() {
    let pt = segments_intersection(
        &Point2::new(0.0, 0.0),
        &Point2::new(10.0, 0.0),
        &Point2::new(10.0, 0.0),
        &Point2::new(10.0, 10.0),
    );
    assert_eq!(pt, Some(Point2::new(10.0, 0.0)));
}

#[test]
fn segment_against_polygon_edges() {
    let poly = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);

    let hit =
        segment_polygon_intersection(&Point2::new(5.0, -5.0), &Point2::new(5.0, 5.0), &poly);
    assert_eq!(hit, Some(Point2::new(5.0, 0.0)));

    let miss =
        segment_polygon_intersection(&Point2::new(-5.0, -5.0), &Point2::new(-5.0, 15.0), &poly);
    assert_eq!(miss, None);

    // A segment fully inside the polygon crosses no edge.
    let inside =
        segment_polygon_intersection(&Point2::new(2.0, 2.0), &Point2::new(8.0, 8.0), &poly);
    assert_eq!(inside, None);
}

#[test]
fn polygon_edges_are_tested_in_world_space() {
    let mut poly = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    poly.set_origin(Vector2::new(100.0, 0.0));

    let hit =
        segment_polygon_intersection(&Point2::new(105.0, -5.0), &Point2::new(105.0, 5.0), &poly);
    assert_eq!(hit, Some(Point2::new(105.0, 0.0)));

    let miss =
        segment_polygon_intersection(&Point2::new(5.0, -5.0), &Point2::new(5.0, 5.0), &poly);
    assert_eq!(miss, None);
}
