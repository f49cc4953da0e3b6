//! Splitters reacting to the user and to the modifications of feature stores.
//!
//! * [`InteractiveSplitter`] splits the feature under the pointer on click.
//! * [`AutoSplitter`] keeps the features of a store noded: every feature added or modified
//!   is split where it crosses the others, and the others where it crosses them.

pub use self::auto::{self_intersections, AutoSplitter, SplitterState};
pub use self::events::{SplitEvent, SplitListeners, SplitPass};
pub use self::interactive::InteractiveSplitter;
pub use self::nearest::{nearest_split_point, SplitCandidate};
pub use self::options::{SnapOptions, SplitOptions, SplitTriggers};

mod auto;
mod events;
mod interactive;
mod nearest;
mod options;
