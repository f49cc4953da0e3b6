use crate::math::{Real, DEFAULT_TOLERANCE};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// Controls which notifications of the trigger store start a splitting pass.
pub struct SplitTriggers(u8);

bitflags::bitflags! {
    impl SplitTriggers: u8 {
        /// A pass is run when a feature is added to the trigger store.
        const ADD = 1;
        /// A pass is run when the geometry of a feature of the trigger store changes.
        const CHANGE = 1 << 1;
    }
}

impl Default for SplitTriggers {
    fn default() -> Self {
        SplitTriggers::ADD | SplitTriggers::CHANGE
    }
}

/// Options of the splitters.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitOptions {
    /// Two coordinates, or two ratios along a segment, closer than this are equal.
    pub tolerance: Real,
    /// The notifications that start an automatic splitting pass.
    pub triggers: SplitTriggers,
    /// Whether polygons may be cut.
    ///
    /// When `true`, the outer ring of a cut polygon is replaced by open line pieces.
    /// When `false`, polygons can cut lines but are never cut themselves.
    pub split_polygons: bool,
    /// Whether the feature that triggered an automatic pass is also split where it crosses
    /// other features. When `false`, it is only split at its self-intersections.
    pub split_trigger_at_crossings: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            triggers: SplitTriggers::default(),
            split_polygons: false,
            split_trigger_at_crossings: true,
        }
    }
}

/// Options of the pointer snapping of the interactive splitter.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOptions {
    /// The snap distance, in screen pixels.
    pub snap_distance_px: Real,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            snap_distance_px: 25.0,
        }
    }
}

impl SnapOptions {
    /// The snap distance in map units, given the size of a screen pixel in map units.
    pub fn to_map_units(&self, resolution: Real) -> Real {
        self.snap_distance_px * resolution
    }
}
