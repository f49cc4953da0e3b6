use crate::store::{Feature, FeatureKey};
use core::fmt;

/// The report of one automatic splitting pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitPass {
    /// The feature whose addition or modification started the pass.
    pub trigger: Option<FeatureKey>,
    /// The pieces inserted in the target store, in insertion order.
    pub features_added: Vec<FeatureKey>,
    /// The features removed from the target store, as they were before removal.
    pub features_removed: Vec<(FeatureKey, Feature)>,
}

impl SplitPass {
    /// Did this pass leave the target store untouched?
    pub fn is_empty(&self) -> bool {
        self.features_added.is_empty() && self.features_removed.is_empty()
    }

    /// The keys of the removed features.
    pub fn removed_keys(&self) -> Vec<FeatureKey> {
        self.features_removed.iter().map(|(key, _)| *key).collect()
    }
}

/// A lifecycle notification emitted by the splitters.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitEvent {
    /// The interactive splitter is about to replace `original` by `features`.
    BeforeSplit {
        /// The feature being split.
        original: FeatureKey,
        /// The pieces about to be inserted.
        features: Vec<Feature>,
    },
    /// The interactive splitter replaced `original` by `features`.
    AfterSplit {
        /// The key of the removed feature.
        original: FeatureKey,
        /// The keys of the inserted pieces.
        features: Vec<FeatureKey>,
    },
    /// The automatic splitter starts a pass for `trigger`.
    BeforePass {
        /// The feature that started the pass.
        trigger: Option<FeatureKey>,
    },
    /// The automatic splitter completed a pass.
    AfterPass(SplitPass),
}

/// A set of callbacks notified of every [`SplitEvent`].
#[derive(Default)]
pub struct SplitListeners {
    listeners: Vec<Box<dyn FnMut(&SplitEvent)>>,
}

impl SplitListeners {
    /// Registers a callback.
    pub fn add(&mut self, listener: impl FnMut(&SplitEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The number of registered callbacks.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Is there no callback registered?
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every callback with `event`, in registration order.
    pub fn emit(&mut self, event: &SplitEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for SplitListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
