//! Feature collections the splitters read from and write to.

pub use self::feature::{Feature, FeatureKey, Properties, PropertyValue};
pub use self::feature_store::{FeatureStore, StoreError, StoreEvent};
pub use self::memory_store::MemoryStore;

mod feature;
mod feature_store;
mod memory_store;
