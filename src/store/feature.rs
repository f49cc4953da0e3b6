use crate::shape::Geometry;
use core::fmt;
use indexmap::IndexMap;

/// The identifier of a feature inside of a store.
///
/// Keys are assigned by the store on insertion and never reused: the key of a removed
/// feature stays stale forever.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey(pub u64);

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The value of a feature attribute.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PropertyValue {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

/// The attributes of a feature, in insertion order.
pub type Properties = IndexMap<String, PropertyValue>;

/// A geometry together with its attributes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// The geometry of this feature.
    pub geometry: Geometry,
    /// The attributes of this feature.
    pub properties: Properties,
}

impl Feature {
    /// Creates a feature without any attribute.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            properties: Properties::new(),
        }
    }

    /// Sets the attribute `name` of this feature.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let _ = self.properties.insert(name.into(), value.into());
        self
    }

    /// The attribute named `name`, if any.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Creates an independent feature with a copy of the attributes of `self` and the given
    /// geometry.
    ///
    /// This is how a split piece inherits the attributes of the feature it comes from.
    pub fn with_geometry(&self, geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            properties: self.properties.clone(),
        }
    }
}
