//! Point containment queries.

pub use self::point_query::PointQuery;

mod point_holed_shape;
mod point_polygon;
mod point_query;
