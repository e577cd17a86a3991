/*!
collide2d
=========

**collide2d** is a 2-dimensional convex polygon collision testing library
written with the rust programming language.

It provides a mutable [`shape::Polygon`] meant to track a moving game entity
(incremental scale and rotation, a world-space origin, and a lazily
recomputed bounding box), and stateless queries on top of it: a Separating
Axis Theorem intersection test, segment/segment and segment/polygon
intersection, and point containment through the [`query::PointQuery`] trait.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    use na::{Point2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    pub type Vector = Vector2<Real>;

    /// The unit vector type.
    pub type UnitVector = UnitVector2<Real>;
}
