//! Various unsorted geometrical and logical operators.

pub use self::segments_intersection::segments_intersection2d;

mod segments_intersection;

use crate::math::{Point, Real};

/// Are `a` and `b` equal, up to `epsilon` on each coordinate?
#[inline]
pub fn points_equal(a: &Point<Real>, b: &Point<Real>, epsilon: Real) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}
