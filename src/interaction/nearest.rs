use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::store::{Feature, FeatureKey, FeatureStore};
use na;

/// A point where a feature can be split, found near the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitCandidate {
    /// The index of the store containing the feature, in the list of searched stores.
    pub store: usize,
    /// The feature to split.
    pub key: FeatureKey,
    /// The point where the feature should be split. It lies on the feature geometry.
    pub split_point: Point<Real>,
    /// The distance between the pointer and `split_point`.
    pub distance: Real,
    /// Is `split_point` an existing vertex of the feature geometry?
    pub snapped_to_vertex: bool,
}

/// Finds the point, on a feature accepted by `filter`, where a click at `point` should split.
///
/// The stores are searched in order, and the first one having a feature closer than
/// `snap_distance` (in map units) wins, even if a later store has a closer feature. In
/// each store, the closest feature accepted by `filter` is selected, and `point` is
/// projected on it.
///
/// If the projection itself lies within `snap_distance` of one of the feature vertices,
/// the vertex closest to the projection is returned exactly instead.
///
/// Returns `None` if no feature is close enough.
pub fn nearest_split_point<'a, I>(
    point: &Point<Real>,
    stores: I,
    snap_distance: Real,
    filter: &dyn Fn(FeatureKey, &Feature) -> bool,
) -> Option<SplitCandidate>
where
    I: IntoIterator<Item = &'a dyn FeatureStore>,
{
    for (store_id, store) in stores.into_iter().enumerate() {
        if let Some(candidate) = nearest_in_store(point, store, snap_distance, filter) {
            return Some(SplitCandidate {
                store: store_id,
                ..candidate
            });
        }
    }

    None
}

fn nearest_in_store(
    point: &Point<Real>,
    store: &dyn FeatureStore,
    snap_distance: Real,
    filter: &dyn Fn(FeatureKey, &Feature) -> bool,
) -> Option<SplitCandidate> {
    let key = store.closest_feature_to(point, filter)?;
    let line = store.get(key)?.geometry.line_string();
    let proj = line.project_local_point_with_max_dist(point, snap_distance)?;

    let mut candidate = SplitCandidate {
        store: 0,
        key,
        split_point: proj.point,
        distance: na::distance(point, &proj.point),
        snapped_to_vertex: false,
    };

    if let Some((_, vertex)) = line.nearest_vertex(&proj.point) {
        if na::distance(&proj.point, &vertex) <= snap_distance {
            candidate.split_point = vertex;
            candidate.distance = na::distance(point, &vertex);
            candidate.snapped_to_vertex = true;
        }
    }

    Some(candidate)
}
