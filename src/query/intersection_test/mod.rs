pub use self::intersection_test_polygon_polygon::intersection_test_polygon_polygon;

mod intersection_test_polygon_polygon;
