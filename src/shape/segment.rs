//! Definition of the segment shape.

use crate::math::{Point, Real};

/// A straight segment between two points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// Where a projected point lies on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// On the endpoint `0` (`a`) or `1` (`b`).
    OnVertex(u32),
    /// Strictly between the endpoints, with the weights of `a` and `b`.
    OnEdge([Real; 2]),
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Are both vertices of this segment equal, up to `epsilon` on each coordinate?
    ///
    /// Degenerate segments appear while a line is being drawn (the pointer has not
    /// moved since the last vertex was placed) and never intersect anything.
    pub fn is_degenerate(&self, epsilon: Real) -> bool {
        crate::utils::points_equal(&self.a, &self.b, epsilon)
    }

    /// Computes the intersection point between this segment and `other`.
    ///
    /// See [`segments_intersection2d`](crate::utils::segments_intersection2d).
    #[inline]
    pub fn intersection(&self, other: &Segment, epsilon: Real) -> Option<Point<Real>> {
        crate::utils::segments_intersection2d(self, other, epsilon)
    }
}
