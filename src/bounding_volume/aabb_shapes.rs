use crate::bounding_volume::Aabb;
use crate::shape::{Geometry, LineString, Segment};

impl Segment {
    /// Computes the axis-aligned bounding box of this segment.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(self.a.inf(&self.b), self.a.sup(&self.b))
    }
}

impl LineString {
    /// Computes the axis-aligned bounding box of this line.
    ///
    /// The result is invalid (`mins > maxs`) if the line has no point.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(self.points())
    }
}

impl Geometry {
    /// Computes the axis-aligned bounding box of this geometry.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.line_string().local_aabb()
    }
}
