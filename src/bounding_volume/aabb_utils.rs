use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// Returns an invalid AABB (with `mins > maxs`) if the iterator is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    if let Some(first) = it.next() {
        let mut result = Aabb::new(first, first);

        for pt in it {
            result.take_point(pt);
        }

        result
    } else {
        Aabb::new_invalid()
    }
}
