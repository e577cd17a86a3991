/// A shape combining two other shapes: a filled outer shape and a hole cut
/// out of it.
///
/// Any pair of shapes implementing [`crate::query::PointQuery`] can be
/// combined; containment is delegated to both parts.
#[derive(Copy, Clone, Debug)]
pub struct HoledShape<Outer, Hole> {
    /// The filled outer shape.
    pub outer: Outer,
    /// The hole cut out of the outer shape.
    pub hole: Hole,
}

impl<Outer, Hole> HoledShape<Outer, Hole> {
    /// Combines `outer` and `hole` into a single shape.
    pub fn new(outer: Outer, hole: Hole) -> Self {
        HoledShape { outer, hole }
    }
}
