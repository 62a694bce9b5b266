//! Style declarations
//!
//! A property bag keyed by property name. Values stay as JSON so typed
//! values (numbers, keyframe arrays, font descriptions) survive the cascade
//! untouched; interpreting them is the rendering layer's job.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Property name -> value mapping with unique keys
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Declaration {
    properties: HashMap<String, Value>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties
    pub fn get_length(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Raw value of a property
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Property value as text. Strings are borrowed, other JSON values are
    /// rendered as JSON text.
    pub fn get_property_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.properties.get(name).map(|value| match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Set a property, replacing any previous value
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    /// Copy every property of `other` into this declaration, overwriting
    /// same-named properties
    pub fn set_all(&mut self, other: &Declaration) {
        for (name, value) in &other.properties {
            self.properties.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Declaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declaration = Declaration::new();
        for (name, value) in iter {
            declaration.set_property(name, value);
        }
        declaration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_property_replaces() {
        let mut dec = Declaration::new();
        dec.set_property("color", "red");
        dec.set_property("color", "blue");
        assert_eq!(dec.get_length(), 1);
        assert_eq!(dec.get_property_value("color").as_deref(), Some("blue"));
    }

    #[test]
    fn test_set_all_overrides_per_property() {
        let mut base: Declaration = [("color", "red"), ("width", "10px")].into_iter().collect();
        let top: Declaration = [("color", "green")].into_iter().collect();
        base.set_all(&top);

        assert_eq!(base.get_length(), 2);
        assert_eq!(base.get_property_value("color").as_deref(), Some("green"));
        assert_eq!(base.get_property_value("width").as_deref(), Some("10px"));
    }

    #[test]
    fn test_typed_values() {
        let mut dec = Declaration::new();
        dec.set_property("flex", 1);
        dec.set_property("frames", json!([{ "time": 0 }]));

        assert_eq!(dec.get_property_value("flex").as_deref(), Some("1"));
        assert_eq!(dec.get("frames"), Some(&json!([{ "time": 0 }])));
        assert_eq!(dec.get_property_value("missing"), None);
    }
}
