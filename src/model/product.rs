use crate::model::{numeric_or_none, Id, LocalizedText, PriceMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category. Pricing rules branch on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    ThreeDFrame,
    TwoDFrame,
    AcrylicStand,
    Additional,
    SoftcopyDesign,
    /// Any category name the catalog carries that has no dedicated pricing rule.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::ThreeDFrame => "3D Frame",
            Category::TwoDFrame => "2D Frame",
            Category::AcrylicStand => "Acrylic Stand",
            Category::Additional => "Additional",
            Category::SoftcopyDesign => "Softcopy Design",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "3D Frame" => Category::ThreeDFrame,
            "2D Frame" => Category::TwoDFrame,
            "Acrylic Stand" => Category::AcrylicStand,
            "Additional" => Category::Additional,
            "Softcopy Design" => Category::SoftcopyDesign,
            _ => Category::Other(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static catalog product. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Id,
    pub category: Category,
    pub name: String,
    /// Fallback unit price when no option-based price applies.
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub options: ProductOptions,
    #[serde(default)]
    pub admin: ProductAdmin,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOptions {
    #[serde(default)]
    pub variations: Vec<OptionGroup>,
}

/// Catalog-default storefront metadata. Distinct from the mutable admin override store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdmin {
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub show_in_gallery: bool,
    #[serde(default)]
    pub shipping_origins: Vec<String>,
    #[serde(default)]
    pub shipping_destinations: Vec<String>,
    #[serde(default)]
    pub frames: FrameAvailability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ProductAdmin {
    fn default() -> Self {
        Self {
            active: true,
            show_in_gallery: true,
            shipping_origins: Vec::new(),
            shipping_destinations: Vec::new(),
            frames: FrameAvailability::default(),
            display_name: None,
            description: None,
        }
    }
}

/// Which frame front materials a product can be ordered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameAvailability {
    #[serde(default = "default_true")]
    pub glass: bool,
    #[serde(default = "default_true")]
    pub acrylic: bool,
}

impl Default for FrameAvailability {
    fn default() -> Self {
        Self {
            glass: true,
            acrylic: true,
        }
    }
}

/// One selectable axis of a product (size, frame color, stand type, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: Id,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

impl OptionGroup {
    pub fn find(&self, value: &str) -> Option<&ProductOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// The option a customer can actually pick for `value`, skipping inactive ones.
    pub fn find_active(&self, value: &str) -> Option<&ProductOption> {
        self.options
            .iter()
            .find(|option| option.value == value && option.is_active())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub value: String,
    pub label: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, deserialize_with = "numeric_or_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_mode: Option<PriceMode>,
    /// Unset means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl ProductOption {
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn is_override(&self) -> bool {
        self.price_mode.is_some_and(PriceMode::is_override)
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_known_and_unknown_names() {
        let category: Category = serde_json::from_str(r#""2D Frame""#).unwrap();
        assert_eq!(category, Category::TwoDFrame);

        let category: Category = serde_json::from_str(r#""Gift Card""#).unwrap();
        assert_eq!(category, Category::Other("Gift Card".to_string()));
        assert_eq!(serde_json::to_string(&category).unwrap(), r#""Gift Card""#);
    }

    #[test]
    fn test_product_defaults_when_admin_block_missing() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p1", "category": "3D Frame", "name": "Frame", "price": 100}"#,
        )
        .unwrap();

        assert!(product.admin.active);
        assert!(product.admin.frames.glass);
        assert!(product.options.variations.is_empty());
    }

    #[test]
    fn test_find_active_skips_disabled_options() {
        let group: OptionGroup = serde_json::from_str(
            r#"{
                "id": "size",
                "defaultValue": "a",
                "options": [
                    {"value": "a", "label": "A", "price": 1, "active": false},
                    {"value": "b", "label": "B", "price": 2}
                ]
            }"#,
        )
        .unwrap();

        assert!(group.find("a").is_some());
        assert!(group.find_active("a").is_none());
        assert_eq!(group.find_active("b").map(|o| o.price_or_zero()), Some(2.0));
    }
}
