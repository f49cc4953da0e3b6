use crate::math::{Point, Real};
use crate::shape::LineString;

/// A polygon, reduced to its outer ring.
///
/// Holes are not represented: for splitting purposes a polygon is the closed line
/// running along its boundary.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    exterior: LineString,
}

impl Polygon {
    /// Creates a polygon from its outer ring.
    ///
    /// The ring is closed by repeating its first vertex if it isn't already.
    pub fn new(exterior: LineString) -> Self {
        let mut points = exterior.into_points();

        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if points.len() > 1 && first != last {
                points.push(first);
            }
        }

        Self {
            exterior: LineString::new(points),
        }
    }

    /// The outer ring of this polygon.
    pub fn exterior(&self) -> &LineString {
        &self.exterior
    }
}

/// The geometry owned by a feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// An open or closed polyline.
    LineString(LineString),
    /// A polygon, represented by its outer ring.
    Polygon(Polygon),
}

impl Geometry {
    /// The line the splitting algorithms operate on: the line itself, or the outer ring of
    /// a polygon.
    pub fn line_string(&self) -> &LineString {
        match self {
            Geometry::LineString(line) => line,
            Geometry::Polygon(polygon) => polygon.exterior(),
        }
    }

    /// Is this geometry a polygon?
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon(_))
    }

    /// Splits this geometry at the given points.
    ///
    /// A line yields line pieces. A polygon yields the pieces of its ring, as lines, when
    /// `split_polygons` is `true`; otherwise it is never split and is returned whole.
    /// The result contains a single element if no split happened.
    pub fn split_at(
        &self,
        points: &[Point<Real>],
        epsilon: Real,
        split_polygons: bool,
    ) -> Vec<Geometry> {
        if self.is_polygon() && !split_polygons {
            return vec![self.clone()];
        }

        let pieces = self.line_string().split_at(points, epsilon);

        if pieces.len() < 2 {
            vec![self.clone()]
        } else {
            pieces.into_iter().map(Geometry::LineString).collect()
        }
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}
