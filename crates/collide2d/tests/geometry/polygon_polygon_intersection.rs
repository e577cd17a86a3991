use collide2d::query::intersection_test_polygon_polygon;
use collide2d::shape::Polygon;
use nalgebra::{Point2, Vector2};

#[test]
fn a_shape_intersects_itself() {
    let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 20.0);
    let mut b = a.clone();
    assert!(intersection_test_polygon_polygon(&mut a, &mut b));
}

#[test]
fn disjoint_bounding_boxes_short_circuit() {
    let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    let mut b = Polygon::from_rect(20.0, 20.0, 10.0, 10.0);
    assert!(!intersection_test_polygon_polygon(&mut a, &mut b));
}

#[test]
fn touching_edges_count_as_intersection() {
    let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    let mut b = Polygon::from_rect(10.0, 0.0, 10.0, 10.0);
    assert!(intersection_test_polygon_polygon(&mut a, &mut b));
    assert!(intersection_test_polygon_polygon(&mut b, &mut a));
}

#[test]
fn overlapping_bounding_boxes_still_need_an_overlap() {
    // The diamond's bounding box overlaps the square's, but the diagonal
    // edge keeps the shapes themselves apart.
    let mut square = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    let mut diamond = Polygon::from_circle(Point2::new(0.0, 0.0), 5.0, 4);

    diamond.set_origin(Vector2::new(13.5, 13.5));
    assert!(!intersection_test_polygon_polygon(&mut square, &mut diamond));

    diamond.set_origin(Vector2::new(12.0, 12.0));
    assert!(intersection_test_polygon_polygon(&mut square, &mut diamond));
}

#[test]
fn origin_moves_shapes_in_and_out_of_collision() {
    let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    let mut b = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);

    b.set_origin(Vector2::new(50.0, 0.0));
    assert!(!intersection_test_polygon_polygon(&mut a, &mut b));

    b.set_origin(Vector2::new(5.0, 0.0));
    assert!(intersection_test_polygon_polygon(&mut a, &mut b));
}

#[test]
fn scale_grows_a_shape_into_collision() {
    let mut a = Polygon::from_rect(0.0, 0.0, 10.0, 10.0);
    let mut b = Polygon::from_rect(20.0, 20.0, 10.0, 10.0);
    assert!(!intersection_test_polygon_polygon(&mut a, &mut b));

    // Scaling happens about the local origin, so the far corner reaches b.
    a.set_scale(3.0);
    assert!(intersection_test_polygon_polygon(&mut a, &mut b));
}

#[test]
fn rotation_is_taken_into_account() {
    // A long thin bar above a square: apart while axis-aligned, colliding
    // once the bar is rotated onto the square.
    let mut square = Polygon::from_rect(-2.0, -2.0, 4.0, 4.0);
    let mut bar = Polygon::from_rect(-10.0, 5.0, 20.0, 2.0);
    assert!(!intersection_test_polygon_polygon(&mut square, &mut bar));

    bar.set_rotation(90.0);
    assert!(intersection_test_polygon_polygon(&mut square, &mut bar));
}

#[test]
fn circle_approximations_collide_by_distance() {
    let mut a = Polygon::from_circle(Point2::new(0.0, 0.0), 5.0, 8);
    let mut b = Polygon::from_circle(Point2::new(0.0, 0.0), 5.0, 8);

    b.set_origin(Vector2::new(20.0, 0.0));
    assert!(!intersection_test_polygon_polygon(&mut a, &mut b));

    b.set_origin(Vector2::new(9.0, 0.0));
    assert!(intersection_test_polygon_polygon(&mut a, &mut b));
}
