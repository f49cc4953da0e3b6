use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{LineString, SegmentPointLocation};
use na;
use ordered_float::OrderedFloat;

impl PointQuery for LineString {
    #[inline]
    fn project_local_point(&self, point: &Point<Real>) -> Option<PointProjection> {
        self.project_local_point_and_get_location(point)
            .map(|(proj, _)| proj)
    }
}

impl PointQueryWithLocation for LineString {
    /// The index of the segment the point was projected on, and the location on that segment.
    type Location = (u32, SegmentPointLocation);

    /// Projects a point on the closest segment of this line.
    ///
    /// Ties are resolved in favor of the segment appearing first in vertex order.
    /// Returns `None` if the line has less than two vertices.
    #[inline]
    fn project_local_point_and_get_location(
        &self,
        point: &Point<Real>,
    ) -> Option<(PointProjection, Self::Location)> {
        let mut best: Option<(Real, PointProjection, Self::Location)> = None;

        for (i, seg) in self.segments().enumerate() {
            if let Some((proj, loc)) = seg.project_local_point_and_get_location(point) {
                let dist = na::distance_squared(point, &proj.point);

                if best.as_ref().map(|b| dist < b.0).unwrap_or(true) {
                    best = Some((dist, proj, (i as u32, loc)));
                }
            }
        }

        best.map(|(_, proj, loc)| (proj, loc))
    }
}

impl LineString {
    /// The closest point of this line to `point`.
    ///
    /// Returns `None` if the line has less than two vertices.
    #[inline]
    pub fn closest_point(&self, point: &Point<Real>) -> Option<Point<Real>> {
        self.project_local_point(point).map(|proj| proj.point)
    }

    /// The vertex of this line closest to `point`, with its index.
    ///
    /// Ties are resolved in favor of the first vertex. Returns `None` if the line has no
    /// vertex.
    pub fn nearest_vertex(&self, point: &Point<Real>) -> Option<(u32, Point<Real>)> {
        self.points()
            .iter()
            .enumerate()
            .min_by_key(|(_, pt)| OrderedFloat(na::distance_squared(*pt, point)))
            .map(|(i, pt)| (i as u32, *pt))
    }
}
