//! Shapes supported by collide2d.

pub use self::holed_shape::HoledShape;
pub use self::polygon::{Polygon, PolygonBuilderError};

mod holed_shape;
mod polygon;
