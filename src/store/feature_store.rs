use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Geometry;
use crate::store::{Feature, FeatureKey};

/// Error returned by a store operation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The key does not identify a feature of the store, either because it was removed or
    /// because it was never assigned by this store.
    #[error("no feature with key {0} in this store.")]
    UnknownFeature(FeatureKey),
}

/// A notification recorded by a store whenever its content is modified.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// A feature was inserted.
    Added(FeatureKey),
    /// The geometry of a feature was replaced.
    Changed(FeatureKey),
    /// A feature was removed.
    Removed {
        /// The key the feature had.
        key: FeatureKey,
        /// The feature as it was when it was removed.
        feature: Feature,
    },
}

impl StoreEvent {
    /// The key of the feature this notification is about.
    pub fn key(&self) -> FeatureKey {
        match self {
            StoreEvent::Added(key) | StoreEvent::Changed(key) => *key,
            StoreEvent::Removed { key, .. } => *key,
        }
    }
}

/// A collection of features the splitters operate on.
///
/// Every mutation records a [`StoreEvent`]. Notifications are not delivered synchronously:
/// they are queued until [`FeatureStore::take_events`] is called, which lets a splitter
/// observe the consequences of its own writes without being re-entered.
pub trait FeatureStore {
    /// Inserts a feature and returns its newly assigned key. Records [`StoreEvent::Added`].
    fn insert(&mut self, feature: Feature) -> FeatureKey;

    /// Removes a feature. Records [`StoreEvent::Removed`].
    fn remove(&mut self, key: FeatureKey) -> Result<Feature, StoreError>;

    /// Replaces the geometry of a feature and returns the previous one.
    /// Records [`StoreEvent::Changed`].
    fn set_geometry(&mut self, key: FeatureKey, geometry: Geometry)
        -> Result<Geometry, StoreError>;

    /// The feature identified by `key`.
    fn get(&self, key: FeatureKey) -> Option<&Feature>;

    /// The number of features in this store.
    fn len(&self) -> usize;

    /// Does this store contain no feature?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Does this store contain a feature identified by `key`?
    fn contains(&self, key: FeatureKey) -> bool {
        self.get(key).is_some()
    }

    /// The keys of all the features of this store.
    fn keys(&self) -> Vec<FeatureKey>;

    /// The keys of every feature whose bounding box intersects `aabb`.
    fn features_intersecting(&self, aabb: &Aabb) -> Vec<FeatureKey>;

    /// The feature accepted by `filter` whose geometry is the closest to `point`.
    ///
    /// Features with a degenerate geometry are ignored.
    fn closest_feature_to(
        &self,
        point: &Point<Real>,
        filter: &dyn Fn(FeatureKey, &Feature) -> bool,
    ) -> Option<FeatureKey>;

    /// Drains the notifications recorded since the last call, oldest first.
    fn take_events(&mut self) -> Vec<StoreEvent>;

    /// Puts `events` back at the front of the queue, before the notifications recorded
    /// since they were taken.
    fn requeue_events(&mut self, events: Vec<StoreEvent>);
}
