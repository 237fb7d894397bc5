use crate::model::OptionGroup;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Request-time view of a product's option groups after admin overrides are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    pub base_price: Option<f64>,
    pub groups: Vec<OptionGroup>,
}

/// A customer's chosen option values, keyed by group id.
///
/// Entries keep the order they had in the request document: the Additional
/// pricing rule looks at the first entry regardless of its key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, String)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, group_id: impl Into<String>, value: impl Into<String>) {
        let group_id = group_id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == group_id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((group_id, value)),
        }
    }

    pub fn with(mut self, group_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(group_id, value);
        self
    }

    pub fn get(&self, group_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == group_id)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the first entry in document order.
    pub fn first_value(&self) -> Option<&str> {
        self.entries.first().map(|(_, value)| value.as_str())
    }

    /// True when at least one entry carries a non-empty value.
    pub fn has_any_value(&self) -> bool {
        self.entries.iter().any(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (key, value) in iter {
            selection.insert(key, value);
        }
        selection
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SelectionVisitor;

impl<'de> Visitor<'de> for SelectionVisitor {
    type Value = Selection;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of option group id to selected value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Selection, A::Error> {
        let mut selection = Selection::new();
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(text) => text,
                serde_json::Value::Number(number) => number.to_string(),
                serde_json::Value::Bool(flag) => flag.to_string(),
                other => other.to_string(),
            };
            selection.insert(key, value);
        }
        Ok(selection)
    }

    fn visit_unit<E>(self) -> Result<Selection, E> {
        Ok(Selection::new())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SelectionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_keeps_document_order() {
        let selection: Selection =
            serde_json::from_str(r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#).unwrap();

        let keys: Vec<&str> = selection.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(selection.first_value(), Some("1"));
    }

    #[test]
    fn test_selection_stringifies_scalars_and_drops_nulls() {
        let selection: Selection =
            serde_json::from_str(r#"{"faces": 3, "express": true, "note": null}"#).unwrap();

        assert_eq!(selection.get("faces"), Some("3"));
        assert_eq!(selection.get("express"), Some("true"));
        assert_eq!(selection.get("note"), None);
    }

    #[test]
    fn test_has_any_value_ignores_empty_strings() {
        let selection = Selection::new().with("size", "");
        assert!(!selection.is_empty());
        assert!(!selection.has_any_value());
        assert!(selection.with("color", "black").has_any_value());
    }

    #[test]
    fn test_null_selection_is_empty() {
        let selection: Selection = serde_json::from_str("null").unwrap();
        assert!(selection.is_empty());
    }
}
