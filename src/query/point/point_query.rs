use crate::math::{Point, Real};
use na;

/// The closest point of a shape to some query point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Is the query point on the shape already (up to rounding)?
    pub is_inside: bool,
    /// The closest point of the shape.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Shapes a point can be projected on.
///
/// Degenerate shapes, such as a line with less than two vertices, have no projection.
pub trait PointQuery {
    /// The closest point of `self` to `pt`.
    fn project_local_point(&self, pt: &Point<Real>) -> Option<PointProjection>;

    /// Same as [`PointQuery::project_local_point`], but `None` when the projection is
    /// further than `max_dist` from `pt`.
    fn project_local_point_with_max_dist(
        &self,
        pt: &Point<Real>,
        max_dist: Real,
    ) -> Option<PointProjection> {
        self.project_local_point(pt)
            .filter(|proj| na::distance(&proj.point, pt) <= max_dist)
    }

    /// The distance between `pt` and its projection on `self`.
    fn distance_to_local_point(&self, pt: &Point<Real>) -> Option<Real> {
        self.project_local_point(pt)
            .map(|proj| na::distance(pt, &proj.point))
    }
}

/// Shapes telling which part of them the projection landed on.
pub trait PointQueryWithLocation {
    /// The part of the shape a projection lies on.
    type Location;

    /// The closest point of `self` to `pt`, and where it lies.
    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> Option<(PointProjection, Self::Location)>;
}
