//! Application of the Separating Axis Theorem to pairs of shapes.

pub use self::sat_polygon_polygon::polygon_polygon_separating_axis_exists;

mod sat_polygon_polygon;
