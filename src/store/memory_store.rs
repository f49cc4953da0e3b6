use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Geometry;
use crate::store::{Feature, FeatureKey, FeatureStore, StoreError, StoreEvent};
use indexmap::IndexMap;

#[derive(Clone, Debug)]
struct Entry {
    feature: Feature,
    aabb: Aabb,
}

impl Entry {
    fn new(feature: Feature) -> Self {
        let aabb = feature.geometry.local_aabb();
        Self { feature, aabb }
    }
}

/// A feature store keeping everything in memory.
///
/// Features are kept in insertion order together with their cached bounding box. Spatial
/// queries are linear scans over the cached boxes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: IndexMap<FeatureKey, Entry>,
    next_key: u64,
    events: Vec<StoreEvent>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates through the features of this store, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &Feature)> + '_ {
        self.entries.iter().map(|(key, entry)| (*key, &entry.feature))
    }

    /// The geometries of all the features of this store, in insertion order.
    pub fn geometries(&self) -> Vec<&Geometry> {
        self.entries.values().map(|e| &e.feature.geometry).collect()
    }

    /// Are there notifications waiting to be taken?
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl FeatureStore for MemoryStore {
    fn insert(&mut self, feature: Feature) -> FeatureKey {
        let key = FeatureKey(self.next_key);
        self.next_key += 1;
        let _ = self.entries.insert(key, Entry::new(feature));
        self.events.push(StoreEvent::Added(key));
        key
    }

    fn remove(&mut self, key: FeatureKey) -> Result<Feature, StoreError> {
        let entry = self
            .entries
            .shift_remove(&key)
            .ok_or(StoreError::UnknownFeature(key))?;
        self.events.push(StoreEvent::Removed {
            key,
            feature: entry.feature.clone(),
        });
        Ok(entry.feature)
    }

    fn set_geometry(
        &mut self,
        key: FeatureKey,
        geometry: Geometry,
    ) -> Result<Geometry, StoreError> {
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(StoreError::UnknownFeature(key))?;
        entry.aabb = geometry.local_aabb();
        let old = core::mem::replace(&mut entry.feature.geometry, geometry);
        self.events.push(StoreEvent::Changed(key));
        Ok(old)
    }

    fn get(&self, key: FeatureKey) -> Option<&Feature> {
        self.entries.get(&key).map(|e| &e.feature)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<FeatureKey> {
        self.entries.keys().copied().collect()
    }

    fn features_intersecting(&self, aabb: &Aabb) -> Vec<FeatureKey> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.aabb.is_valid() && entry.aabb.intersects(aabb))
            .map(|(key, _)| *key)
            .collect()
    }

    fn closest_feature_to(
        &self,
        point: &Point<Real>,
        filter: &dyn Fn(FeatureKey, &Feature) -> bool,
    ) -> Option<FeatureKey> {
        let mut best: Option<(Real, FeatureKey)> = None;

        for (key, entry) in &self.entries {
            if !entry.aabb.is_valid() {
                continue;
            }

            // The distance to the box is a lower bound of the distance to the geometry.
            if let Some((best_dist, _)) = best {
                if entry.aabb.distance_to_local_point(point) >= best_dist {
                    continue;
                }
            }

            if !filter(*key, &entry.feature) {
                continue;
            }

            if let Some(dist) = entry
                .feature
                .geometry
                .line_string()
                .distance_to_local_point(point)
            {
                if best.map(|(best_dist, _)| dist < best_dist).unwrap_or(true) {
                    best = Some((dist, *key));
                }
            }
        }

        best.map(|(_, key)| key)
    }

    fn take_events(&mut self) -> Vec<StoreEvent> {
        core::mem::take(&mut self.events)
    }

    fn requeue_events(&mut self, mut events: Vec<StoreEvent>) {
        events.append(&mut self.events);
        self.events = events;
    }
}
