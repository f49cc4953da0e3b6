use crate::math::{Point, Real};
use crate::shape::Segment;

/// Indicates an inconsistency while building a line.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A line must contain at least two points.
    #[error("a line must contain at least two points, found {found}.")]
    TooFewPoints {
        /// The number of points that were given.
        found: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A polyline, given by its ordered sequence of vertices.
///
/// Two consecutive vertices form a segment. Consecutive duplicate vertices are allowed
/// and are ignored by the splitting and intersection algorithms. A line with fewer than
/// two vertices is degenerate: it has no segment, is never split, and never intersects
/// anything. Such lines show up transiently while a feature is being drawn.
pub struct LineString {
    points: Vec<Point<Real>>,
}

impl LineString {
    /// Creates a new line from its vertices, without any validation.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// Creates a new line from its vertices, checking that it has at least one segment.
    pub fn try_new(points: Vec<Point<Real>>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                found: points.len(),
            });
        }

        Ok(Self::new(points))
    }

    /// The vertex buffer of this line.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points[..]
    }

    /// Consumes `self` and returns its vertex buffer.
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The number of vertices of this line.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this line have no vertex at all?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Does this line have less than one segment?
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// The first vertex of this line.
    pub fn first_point(&self) -> Option<Point<Real>> {
        self.points.first().copied()
    }

    /// The last vertex of this line.
    pub fn last_point(&self) -> Option<Point<Real>> {
        self.points.last().copied()
    }

    /// Are the first and last vertices of this line equal, up to `epsilon`?
    pub fn is_closed(&self, epsilon: Real) -> bool {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) if self.points.len() > 2 => {
                crate::utils::points_equal(&first, &last, epsilon)
            }
            _ => false,
        }
    }

    /// The number of segments forming this line.
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// An iterator through all the segments of this line, in vertex order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Get the `i`-th segment of this line.
    pub fn segment(&self, i: u32) -> Segment {
        let i = i as usize;
        Segment::new(self.points[i], self.points[i + 1])
    }

    /// Returns a copy of this line where consecutive vertices equal up to `epsilon` are
    /// collapsed into the first one.
    #[must_use]
    pub fn deduplicated(&self, epsilon: Real) -> Self {
        let mut points: Vec<Point<Real>> = Vec::with_capacity(self.points.len());

        for pt in &self.points {
            match points.last() {
                Some(last) if crate::utils::points_equal(last, pt, epsilon) => {}
                _ => points.push(*pt),
            }
        }

        Self::new(points)
    }
}

impl From<Vec<Point<Real>>> for LineString {
    fn from(points: Vec<Point<Real>>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point<Real>> for LineString {
    fn from_iter<I: IntoIterator<Item = Point<Real>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
