use crate::math::{Point, Real};
use crate::shape::LineString;
use crate::utils::points_equal;
use core::mem;

/// Tests if `pt` lies strictly after `a` and at most at `b` on the segment `[a, b]`.
///
/// Colinearity is detected by comparing the ratios `(a.x - pt.x) / (a.x - b.x)` and
/// `(a.y - pt.y) / (a.y - b.y)`: they must agree up to `epsilon` and lie in `(0, 1]`.
/// If the segment is axis-aligned, only the ratio along the other axis is used and `pt`
/// must share the constant coordinate (up to `epsilon`).
///
/// The segment must not be degenerate.
pub fn point_lies_on_segment(
    a: &Point<Real>,
    b: &Point<Real>,
    pt: &Point<Real>,
    epsilon: Real,
) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;

    if dx.abs() <= epsilon {
        // Vertical segment.
        let d = (a.y - pt.y) / dy;
        (a.x - pt.x).abs() <= epsilon && d > 0.0 && d <= 1.0
    } else if dy.abs() <= epsilon {
        // Horizontal segment.
        let d = (a.x - pt.x) / dx;
        (a.y - pt.y).abs() <= epsilon && d > 0.0 && d <= 1.0
    } else {
        let d1 = (a.x - pt.x) / dx;
        let d2 = (a.y - pt.y) / dy;
        (d1 - d2).abs() <= epsilon && d1 > 0.0 && d1 <= 1.0
    }
}

impl LineString {
    /// Splits this line at the given points.
    ///
    /// Points that do not lie on the line (up to `epsilon`) are ignored, and so are points
    /// equal to one of the line extremities. The points are applied one after the other,
    /// each one splitting every piece produced by the previous ones, so their order
    /// doesn't matter.
    ///
    /// # Result
    /// The pieces are returned in the order they appear along the line and, concatenated
    /// end to end, they follow the original line from its first vertex to its last one.
    /// Consecutive duplicate vertices are collapsed in split pieces. If no split happened,
    /// the result contains only a copy of `self`, unchanged.
    pub fn split_at(&self, points: &[Point<Real>], epsilon: Real) -> Vec<LineString> {
        let mut result = vec![self.clone()];

        for pt in points {
            let mut next = Vec::with_capacity(result.len() + 1);

            for piece in result {
                match piece.split_at_point(pt, epsilon) {
                    Some(pieces) => next.extend(pieces),
                    None => next.push(piece),
                }
            }

            result = next;
        }

        result
    }

    /// Splits this line at a single point.
    ///
    /// Returns `None` if no split happened: the point equals one of the line extremities,
    /// isn't on the line, or the line is degenerate.
    ///
    /// If the point lies on a vertex, the line is split at that vertex and no vertex is
    /// added. If the line passes several times through the point, it is split at each
    /// passage. Segments are processed in vertex order.
    pub fn split_at_point(&self, pt: &Point<Real>, epsilon: Real) -> Option<Vec<LineString>> {
        let points = self.points();

        if points.len() < 2 {
            return None;
        }

        let first = points[0];
        let last = points[points.len() - 1];

        if points_equal(pt, &first, epsilon) || points_equal(pt, &last, epsilon) {
            return None;
        }

        let mut pieces = Vec::new();
        let mut current = vec![first];

        for w in points.windows(2) {
            let (c0, c1) = (w[0], w[1]);

            if points_equal(&c0, &c1, epsilon) {
                continue;
            }

            if points_equal(pt, &c1, epsilon) {
                // The split point is a vertex: the current piece ends there, and the
                // next piece starts with it.
                current.push(c1);
                pieces.push(LineString::new(mem::take(&mut current)));
            } else if !points_equal(pt, &c0, epsilon)
                && point_lies_on_segment(&c0, &c1, pt, epsilon)
            {
                current.push(*pt);
                pieces.push(LineString::new(mem::replace(&mut current, vec![*pt])));
            }

            current.push(c1);
        }

        if current.len() > 1 {
            pieces.push(LineString::new(current));
        }

        if pieces.len() > 1 {
            Some(pieces)
        } else {
            None
        }
    }
}
