//! Axis-aligned boxes bounding feature geometries.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};
use na;
use num::Bounded;

/// An axis-aligned box, given by its lower-left and upper-right corners.
///
/// Feature stores keep one per feature, so a split pass only tests the segments of the
/// features whose box overlaps the box of the cutting segment.
///
/// # Example
///
/// ```rust
/// use linesplit2d::bounding_volume::{Aabb, BoundingVolume};
/// use linesplit2d::math::Point;
///
/// let pts = [Point::new(0.0, 10.0), Point::new(10.0, 0.0)];
/// let aabb = Aabb::from_points_ref(&pts);
/// assert_eq!(aabb.mins, Point::new(0.0, 0.0));
/// assert_eq!(aabb.maxs, Point::new(10.0, 10.0));
///
/// let touching = Aabb::new(Point::new(10.5, 0.0), Point::new(12.0, 1.0));
/// assert!(!aabb.intersects(&touching));
/// assert!(aabb.loosened(1.0).intersects(&touching));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The lower-left corner.
    pub mins: Point<Real>,
    /// The upper-right corner.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// A box spanning from `mins` to `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// The box of an empty point set: its corners are swapped at infinity, so it
    /// intersects nothing and growing it by a point yields that point.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// The smallest box containing every point of `pts`.
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts.into_iter().copied())
    }

    /// Does this box contain at least one point?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// Grows this box until it contains `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.inf(&pt);
        self.maxs = self.maxs.sup(&pt);
    }

    /// The distance from `point` to the closest point of this box, zero inside.
    ///
    /// It never exceeds the distance from `point` to the geometry this box bounds.
    #[inline]
    pub fn distance_to_local_point(&self, point: &Point<Real>) -> Real {
        let below = self.mins - point;
        let above = point - self.maxs;
        below.sup(&above).sup(&Vector::zeros()).norm()
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        let margin = Vector::repeat(amount);
        Aabb::new(self.mins - margin, self.maxs + margin)
    }
}
