use crate::interaction::events::{SplitEvent, SplitListeners};
use crate::interaction::nearest::{nearest_split_point, SplitCandidate};
use crate::interaction::options::{SnapOptions, SplitOptions};
use crate::math::{Point, Real};
use crate::store::{Feature, FeatureKey, FeatureStore};

/// Splits the feature under the pointer when the user clicks.
///
/// The splitter keeps no state between clicks: each click looks for the closest feature
/// (see [`nearest_split_point`]) and splits it in two at the point found. The new pieces
/// are not split any further.
pub struct InteractiveSplitter {
    options: SplitOptions,
    snap: SnapOptions,
    filter: Option<Box<dyn Fn(FeatureKey, &Feature) -> bool>>,
    listeners: SplitListeners,
}

impl Default for InteractiveSplitter {
    fn default() -> Self {
        Self::new(SplitOptions::default(), SnapOptions::default())
    }
}

impl InteractiveSplitter {
    /// Creates a splitter accepting every feature.
    pub fn new(options: SplitOptions, snap: SnapOptions) -> Self {
        Self {
            options,
            snap,
            filter: None,
            listeners: SplitListeners::default(),
        }
    }

    /// Only lets the splitter split the features accepted by `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(FeatureKey, &Feature) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Registers a callback notified before and after each split.
    pub fn add_listener(&mut self, listener: impl FnMut(&SplitEvent) + 'static) {
        self.listeners.add(listener);
    }

    /// The splitting options.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// The snapping options.
    pub fn snap_options(&self) -> &SnapOptions {
        &self.snap
    }

    fn accepts(&self, key: FeatureKey, feature: &Feature) -> bool {
        self.filter.as_ref().map(|f| f(key, feature)).unwrap_or(true)
    }

    /// The split point under the pointer, if any, without modifying anything.
    ///
    /// `resolution` is the size of a screen pixel in map units.
    pub fn pointer_move<'a, I>(
        &self,
        stores: I,
        point: &Point<Real>,
        resolution: Real,
    ) -> Option<SplitCandidate>
    where
        I: IntoIterator<Item = &'a dyn FeatureStore>,
    {
        nearest_split_point(
            point,
            stores,
            self.snap.to_map_units(resolution),
            &|key, feature| self.accepts(key, feature),
        )
    }

    /// Splits the feature under the pointer.
    ///
    /// `resolution` is the size of a screen pixel in map units. Returns the keys of the
    /// pieces that replaced the split feature, or `None` if nothing was split. In that case
    /// no event is emitted.
    pub fn click(
        &mut self,
        stores: &mut [&mut dyn FeatureStore],
        point: &Point<Real>,
        resolution: Real,
    ) -> Option<Vec<FeatureKey>> {
        let candidate = self.pointer_move(
            stores.iter().map(|s| &**s as &dyn FeatureStore),
            point,
            resolution,
        )?;
        let store = &mut *stores[candidate.store];
        let original = store.get(candidate.key)?.clone();
        let pieces = original.geometry.split_at(
            &[candidate.split_point],
            self.options.tolerance,
            self.options.split_polygons,
        );

        if pieces.len() < 2 {
            log::trace!(
                "Click at {:?} does not split feature {}.",
                candidate.split_point,
                candidate.key
            );
            return None;
        }

        let features: Vec<Feature> = pieces
            .into_iter()
            .map(|geometry| original.with_geometry(geometry))
            .collect();

        self.listeners.emit(&SplitEvent::BeforeSplit {
            original: candidate.key,
            features: features.clone(),
        });

        if let Err(err) = store.remove(candidate.key) {
            log::debug!("Interactive split aborted: {}", err);
            return None;
        }

        let keys: Vec<FeatureKey> = features.into_iter().map(|f| store.insert(f)).collect();

        self.listeners.emit(&SplitEvent::AfterSplit {
            original: candidate.key,
            features: keys.clone(),
        });

        Some(keys)
    }
}
