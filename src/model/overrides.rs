use crate::model::{numeric_or_none, Id, LocalizedText, PriceMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole admin override document: product id -> override entry.
pub type OverrideMap = BTreeMap<Id, OverrideEntry>;

/// Per-product admin edits. Every field is optional; absent means "use the catalog".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_gallery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "numeric_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<FramesOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsOverride>,
}

impl OverrideEntry {
    pub fn group(&self, group_id: &str) -> Option<&GroupOverride> {
        self.options
            .as_ref()?
            .groups
            .iter()
            .find(|group| group.id == group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FramesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acrylic: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsOverride {
    #[serde(default)]
    pub groups: Vec<GroupOverride>,
}

/// Reshapes one existing option group. Groups with unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOverride {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// When non-empty, replaces the default group's options entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemOverride>>,
}

impl GroupOverride {
    /// Override items, if any were given. An empty list counts as none.
    pub fn items(&self) -> Option<&[ItemOverride]> {
        self.items.as_deref().filter(|items| !items.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOverride {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(
        default,
        deserialize_with = "numeric_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_mode: Option<PriceMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sparse_override_document() {
        let doc = r#"{
            "frame-2d-8r": {
                "active": true,
                "price": 120000,
                "options": {
                    "groups": [
                        {"id": "frame_color", "defaultValue": "white"},
                        {"id": "size", "items": [
                            {"value": "8R", "price": 99000, "priceMode": "override", "active": true}
                        ]}
                    ]
                }
            },
            "stand-a5": {"showInGallery": false}
        }"#;

        let overrides: OverrideMap = serde_json::from_str(doc).unwrap();
        let entry = &overrides["frame-2d-8r"];

        assert_eq!(entry.price, Some(120000.0));
        assert!(entry.group("frame_color").unwrap().items().is_none());
        let items = entry.group("size").unwrap().items().unwrap();
        assert_eq!(items[0].price_mode, Some(PriceMode::Override));
        assert!(entry.group("missing").is_none());
        assert!(overrides["stand-a5"].options.is_none());
    }

    #[test]
    fn test_empty_items_count_as_absent() {
        let group = GroupOverride {
            id: "size".to_string(),
            default_value: None,
            items: Some(Vec::new()),
        };
        assert!(group.items().is_none());
    }
}
