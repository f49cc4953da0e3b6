use crate::bounding_volume::BoundingVolume;
use crate::interaction::events::{SplitEvent, SplitListeners, SplitPass};
use crate::interaction::options::{SplitOptions, SplitTriggers};
use crate::math::{Point, Real};
use crate::shape::{Geometry, LineString, Segment};
use crate::store::{Feature, FeatureKey, FeatureStore, StoreEvent};
use crate::utils::points_equal;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

// Number of rescans of the target features against a single segment of the cutting line
// after which a warning is logged. The rescans are not interrupted.
const RESTART_WARNING_THRESHOLD: usize = 10_000;

type SplitPoints = SmallVec<[Point<Real>; 4]>;

/// The state of an [`AutoSplitter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SplitterState {
    /// Waiting for a notification to start a pass.
    #[default]
    Idle,
    /// A pass is running. Notifications received in this state never start a pass.
    Splitting,
}

/// Keeps the features of a store noded.
///
/// Whenever a feature is added to (or modified in) the trigger store, every feature of the
/// target store it crosses is split at the crossings, and the feature itself is split at
/// its self-intersections and, if it belongs to the target store, at the crossings too.
///
/// The store notifications are fed to the splitter with [`AutoSplitter::handle_event`] (or
/// [`AutoSplitter::handle_trigger_event`] when the trigger store and the target store
/// differ), or pumped with [`AutoSplitter::process_events`]. The writes performed by a
/// pass are themselves recorded by the store: they are drained by the pass and only
/// accumulated into its [`SplitPass`] report, so a pass never triggers another one.
pub struct AutoSplitter {
    options: SplitOptions,
    state: SplitterState,
    interacting: bool,
    pending_drag: Option<FeatureKey>,
    added: IndexSet<FeatureKey>,
    removed: IndexMap<FeatureKey, Feature>,
    filter: Option<Box<dyn Fn(FeatureKey, &Feature) -> bool>>,
    listeners: SplitListeners,
}

impl Default for AutoSplitter {
    fn default() -> Self {
        Self::new(SplitOptions::default())
    }
}

impl AutoSplitter {
    /// Creates an idle splitter allowed to split every feature of the target store.
    pub fn new(options: SplitOptions) -> Self {
        Self {
            options,
            state: SplitterState::Idle,
            interacting: false,
            pending_drag: None,
            added: IndexSet::new(),
            removed: IndexMap::new(),
            filter: None,
            listeners: SplitListeners::default(),
        }
    }

    /// Only lets the splitter split the target features accepted by `filter`.
    ///
    /// Rejected features still cut the trigger feature where they cross it.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(FeatureKey, &Feature) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Registers a callback notified at the beginning and at the end of each pass.
    pub fn add_listener(&mut self, listener: impl FnMut(&SplitEvent) + 'static) {
        self.listeners.add(listener);
    }

    /// The splitting options.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// The current state of this splitter.
    pub fn state(&self) -> SplitterState {
        self.state
    }

    /// Is a continuous modification (e.g. a drag) in progress?
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// The feature whose latest change is waiting for the end of the interaction.
    pub fn pending_drag(&self) -> Option<FeatureKey> {
        self.pending_drag
    }

    fn accepts(&self, key: FeatureKey, feature: &Feature) -> bool {
        self.filter.as_ref().map(|f| f(key, feature)).unwrap_or(true)
    }

    /// Signals the beginning of a continuous modification.
    ///
    /// Until [`AutoSplitter::end_interaction`] is called, change notifications don't start
    /// any pass: only the latest one is kept.
    pub fn begin_interaction(&mut self) {
        self.interacting = true;
        self.pending_drag = None;
    }

    /// Signals the end of a continuous modification of the features of `store`, and runs
    /// one pass for the latest change received meanwhile, if that feature still exists.
    pub fn end_interaction(&mut self, store: &mut dyn FeatureStore) -> Option<SplitPass> {
        self.interacting = false;
        let key = self.pending_drag.take()?;
        self.split_feature(store, key)
    }

    /// Same as [`AutoSplitter::end_interaction`], with distinct trigger and target stores.
    pub fn end_interaction_with(
        &mut self,
        trigger: &dyn FeatureStore,
        target: &mut dyn FeatureStore,
    ) -> Option<SplitPass> {
        self.interacting = false;
        let key = self.pending_drag.take()?;
        let cutter = trigger.get(key)?.clone();
        self.run_pass(target, Some(key), cutter, false)
    }

    /// Reacts to a notification of `store`, which is both the trigger and the target store.
    ///
    /// Returns the report of the pass it started, if any.
    pub fn handle_event(
        &mut self,
        store: &mut dyn FeatureStore,
        event: &StoreEvent,
    ) -> Option<SplitPass> {
        if self.state == SplitterState::Splitting {
            self.accumulate(event);
            return None;
        }

        let key = self.triggering_key(event)?;
        self.split_feature(store, key)
    }

    /// Reacts to a notification of the `trigger` store, splitting the features of `target`.
    ///
    /// The trigger feature is never modified.
    pub fn handle_trigger_event(
        &mut self,
        trigger: &dyn FeatureStore,
        target: &mut dyn FeatureStore,
        event: &StoreEvent,
    ) -> Option<SplitPass> {
        if self.state == SplitterState::Splitting {
            log::debug!("Ignoring trigger notification {:?} during a pass.", event);
            return None;
        }

        let key = self.triggering_key(event)?;
        let cutter = trigger.get(key)?.clone();
        self.run_pass(target, Some(key), cutter, false)
    }

    /// Drains the notifications of `store` and handles them until there is none left.
    ///
    /// Returns the reports of the passes that were run, in order.
    pub fn process_events(&mut self, store: &mut dyn FeatureStore) -> Vec<SplitPass> {
        let mut passes = Vec::new();

        loop {
            let events = store.take_events();

            if events.is_empty() {
                break;
            }

            for event in &events {
                if let Some(pass) = self.handle_event(store, event) {
                    passes.push(pass);
                }
            }
        }

        passes
    }

    /// Runs a pass using the feature `key` of `store` as the cutting feature.
    ///
    /// Returns `None` without doing anything if `key` isn't in the store, or if a pass is
    /// already running.
    pub fn split_feature(
        &mut self,
        store: &mut dyn FeatureStore,
        key: FeatureKey,
    ) -> Option<SplitPass> {
        if self.state == SplitterState::Splitting {
            log::debug!("Ignoring re-entrant split of feature {}.", key);
            return None;
        }

        let Some(cutter) = store.get(key).cloned() else {
            log::debug!("Feature {} no longer exists, nothing to split.", key);
            return None;
        };
        self.run_pass(store, Some(key), cutter, true)
    }

    /// Runs a pass splitting the features of `target` crossed by `cutter`, a feature that
    /// doesn't belong to `target`.
    pub fn split_with(
        &mut self,
        target: &mut dyn FeatureStore,
        cutter: &Feature,
    ) -> Option<SplitPass> {
        if self.state == SplitterState::Splitting {
            log::debug!("Ignoring re-entrant split with a foreign feature.");
            return None;
        }

        self.run_pass(target, None, cutter.clone(), false)
    }

    // The key of the feature a notification should start a pass for, taking the drag
    // coalescing into account.
    fn triggering_key(&mut self, event: &StoreEvent) -> Option<FeatureKey> {
        match event {
            StoreEvent::Added(key) if self.options.triggers.contains(SplitTriggers::ADD) => {
                Some(*key)
            }
            StoreEvent::Changed(key) if self.options.triggers.contains(SplitTriggers::CHANGE) => {
                if self.interacting {
                    self.pending_drag = Some(*key);
                    None
                } else {
                    Some(*key)
                }
            }
            _ => None,
        }
    }

    fn accumulate(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Added(key) => {
                let _ = self.added.insert(*key);
            }
            StoreEvent::Changed(key) => {
                log::debug!("Ignoring change of feature {} during a pass.", key);
            }
            StoreEvent::Removed { key, feature } => {
                if !self.added.shift_remove(key) {
                    let _ = self.removed.insert(*key, feature.clone());
                }
            }
        }
    }

    // Routes the notifications caused by the writes of the running pass.
    fn absorb_events(&mut self, store: &mut dyn FeatureStore) {
        for event in store.take_events() {
            let _ = self.handle_event(store, &event);
        }
    }

    // Replaces the feature `key` by one feature per geometry piece.
    fn replace(
        &mut self,
        store: &mut dyn FeatureStore,
        key: FeatureKey,
        pieces: Vec<Geometry>,
    ) -> bool {
        let original = match store.remove(key) {
            Ok(feature) => feature,
            Err(err) => {
                log::debug!("Skipping split of a stale feature: {}", err);
                return false;
            }
        };

        log::trace!("Splitting feature {} into {} pieces.", key, pieces.len());

        for piece in pieces {
            let _ = store.insert(original.with_geometry(piece));
        }

        self.absorb_events(store);
        true
    }

    fn run_pass(
        &mut self,
        target: &mut dyn FeatureStore,
        trigger: Option<FeatureKey>,
        cutter: Feature,
        cutter_in_target: bool,
    ) -> Option<SplitPass> {
        // Notifications recorded before the pass are not caused by it. They go back to
        // the store once the pass is over.
        let pending = target.take_events();
        self.state = SplitterState::Splitting;
        self.added.clear();
        self.removed.clear();
        self.listeners.emit(&SplitEvent::BeforePass { trigger });

        let epsilon = self.options.tolerance;
        let line = cutter.geometry.line_string().deduplicated(epsilon);
        // Keys are only meaningful in the store that assigned them.
        let skip = trigger.filter(|_| cutter_in_target);
        let crossings = self.split_crossed_features(target, skip, &line);
        let mut split_points = self_intersections(&line, epsilon);

        if self.options.split_trigger_at_crossings {
            for pt in crossings {
                push_unique(&mut split_points, pt, epsilon);
            }
        }

        if let Some(key) = trigger.filter(|_| cutter_in_target && !split_points.is_empty()) {
            let pieces = target
                .get(key)
                .filter(|feature| self.accepts(key, feature))
                .map(|feature| {
                    feature
                        .geometry
                        .split_at(&split_points, epsilon, self.options.split_polygons)
                });

            if let Some(pieces) = pieces.filter(|p| p.len() > 1) {
                let _ = self.replace(target, key, pieces);
            }
        }

        target.requeue_events(pending);
        self.state = SplitterState::Idle;
        let pass = SplitPass {
            trigger,
            features_added: self.added.drain(..).collect(),
            features_removed: self.removed.drain(..).collect(),
        };
        log::trace!(
            "Split pass done: {} features added, {} removed.",
            pass.features_added.len(),
            pass.features_removed.len()
        );
        self.listeners.emit(&SplitEvent::AfterPass(pass.clone()));
        Some(pass)
    }

    // Splits every feature of `target` crossed by `line`, except the feature `skip`, and
    // returns all the crossing points found.
    fn split_crossed_features(
        &mut self,
        target: &mut dyn FeatureStore,
        skip: Option<FeatureKey>,
        line: &LineString,
    ) -> SplitPoints {
        let epsilon = self.options.tolerance;
        let mut crossings = SplitPoints::new();

        for seg in line.segments() {
            if seg.is_degenerate(epsilon) {
                continue;
            }

            let aabb = seg.local_aabb().loosened(epsilon);
            let mut restarts = 0;

            loop {
                // Snapshot, the store is modified while going through the candidates.
                let candidates = target.features_intersecting(&aabb);
                log::trace!("{} split candidates for segment {:?}.", candidates.len(), seg);
                let mut split = None;

                for key in candidates {
                    if Some(key) == skip {
                        continue;
                    }

                    let Some(feature) = target.get(key) else {
                        log::debug!("Split candidate {} vanished.", key);
                        continue;
                    };

                    let hits = segment_crossings(&seg, feature.geometry.line_string(), epsilon);

                    for pt in &hits {
                        push_unique(&mut crossings, *pt, epsilon);
                    }

                    if !self.accepts(key, feature) {
                        continue;
                    }

                    split = hits.iter().find_map(|pt| {
                        let pieces = feature.geometry.split_at(
                            &[*pt],
                            epsilon,
                            self.options.split_polygons,
                        );
                        (pieces.len() > 1).then_some((key, pieces))
                    });

                    if split.is_some() {
                        break;
                    }
                }

                let Some((key, pieces)) = split else {
                    break;
                };

                if self.replace(target, key, pieces) {
                    restarts += 1;

                    if restarts == RESTART_WARNING_THRESHOLD {
                        log::warn!(
                            "Segment {:?} was rescanned {} times, the split pass may not terminate.",
                            seg,
                            restarts
                        );
                    }
                } else {
                    break;
                }
            }
        }

        crossings
    }
}

fn push_unique(points: &mut SplitPoints, pt: Point<Real>, epsilon: Real) {
    if !points.iter().any(|p| points_equal(p, &pt, epsilon)) {
        points.push(pt);
    }
}

// The points where `seg` crosses `line`.
fn segment_crossings(seg: &Segment, line: &LineString, epsilon: Real) -> SplitPoints {
    let mut result = SplitPoints::new();

    for other in line.segments() {
        if let Some(pt) = seg.intersection(&other, epsilon) {
            push_unique(&mut result, pt, epsilon);
        }
    }

    result
}

/// The points where two non-adjacent segments of `line` intersect, without duplicates.
///
/// Consecutive duplicate vertices must have been removed from `line`.
pub fn self_intersections(line: &LineString, epsilon: Real) -> SmallVec<[Point<Real>; 4]> {
    let segments: Vec<Segment> = line.segments().collect();
    let mut result = SplitPoints::new();

    for (i, s1) in segments.iter().enumerate() {
        for s2 in segments.iter().skip(i + 2) {
            if let Some(pt) = s1.intersection(s2, epsilon) {
                push_unique(&mut result, pt, epsilon);
            }
        }
    }

    result
}
