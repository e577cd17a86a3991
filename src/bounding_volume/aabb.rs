//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum
/// corners. Its edges are always parallel to the coordinate axes, making
/// intersection tests very cheap. It is used here as a coarse pre-filter for
/// the polygon intersection test.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide2d::bounding_volume::Aabb;
/// use collide2d::na::Point2;
///
/// let aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(10.0, 20.0));
/// assert_eq!(aabb.center(), Point2::new(5.0, 10.0));
/// assert_eq!(aabb.extents(), collide2d::na::Vector2::new(10.0, 20.0));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be less than or equal to the
    /// corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Useful as the initial value of a merging fold: any point merged into it
    /// becomes the bounds.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(&pt);
            result.maxs = result.maxs.sup(&pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) / 2.0
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// Checks whether this AABB intersects `other`, bounds included.
    ///
    /// Two AABBs sharing only a boundary are reported as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
    }
}
