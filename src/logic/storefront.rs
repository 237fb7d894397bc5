use crate::logic::resolve::flat_price;
use crate::model::{Category, FrameAvailability, Id, OverrideEntry, Product};
use serde::Serialize;

/// A catalog product as the storefront shows it, with admin display edits applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Id,
    pub category: Category,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub active: bool,
    pub show_in_gallery: bool,
    pub frames: FrameAvailability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    pub images: Vec<String>,
    pub shipping_origins: Vec<String>,
    pub shipping_destinations: Vec<String>,
}

/// Override flag first, then the catalog default.
pub fn is_active(product: &Product, entry: Option<&OverrideEntry>) -> bool {
    entry
        .and_then(|e| e.active)
        .unwrap_or(product.admin.active)
}

pub fn product_view(product: &Product, entry: Option<&OverrideEntry>) -> ProductView {
    let admin = &product.admin;
    let frames = entry.and_then(|e| e.frames.as_ref());

    ProductView {
        id: product.id.clone(),
        category: product.category.clone(),
        name: entry
            .and_then(|e| e.display_name.clone())
            .or_else(|| admin.display_name.clone())
            .unwrap_or_else(|| product.name.clone()),
        description: entry
            .and_then(|e| e.description.clone())
            .or_else(|| admin.description.clone())
            .or_else(|| product.description.clone()),
        price: flat_price(product, entry),
        active: is_active(product, entry),
        show_in_gallery: entry
            .and_then(|e| e.show_in_gallery)
            .unwrap_or(admin.show_in_gallery),
        frames: FrameAvailability {
            glass: frames.and_then(|f| f.glass).unwrap_or(admin.frames.glass),
            acrylic: frames.and_then(|f| f.acrylic).unwrap_or(admin.frames.acrylic),
        },
        main_image: main_image(product, entry),
        images: product.images.clone(),
        shipping_origins: admin.shipping_origins.clone(),
        shipping_destinations: admin.shipping_destinations.clone(),
    }
}

/// Explicit image path, then the indexed catalog image, then the first one.
fn main_image(product: &Product, entry: Option<&OverrideEntry>) -> Option<String> {
    if let Some(path) = entry.and_then(|e| e.main_image.clone()) {
        return Some(path);
    }
    entry
        .and_then(|e| e.main_image_index)
        .and_then(|index| product.images.get(index))
        .or_else(|| product.images.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::default_products;
    use crate::model::FramesOverride;

    fn stand() -> Product {
        let mut product = default_products()
            .into_iter()
            .find(|p| p.id == "acrylic-stand")
            .unwrap();
        product.images.push("/images/products/acrylic-stand-2.jpg".to_string());
        product
    }

    #[test]
    fn test_view_without_override_mirrors_catalog() {
        let product = stand();
        let view = product_view(&product, None);

        assert_eq!(view.name, "Stand Akrilik");
        assert_eq!(view.price, 85000.0);
        assert!(view.active);
        assert!(!view.frames.glass);
        assert_eq!(view.main_image.as_deref(), Some("/images/products/acrylic-stand.jpg"));
    }

    #[test]
    fn test_display_overrides_apply() {
        let product = stand();
        let entry = OverrideEntry {
            active: Some(false),
            show_in_gallery: Some(false),
            display_name: Some("Acrylic Stand Premium".to_string()),
            price: Some(95000.0),
            frames: Some(FramesOverride {
                glass: Some(true),
                acrylic: None,
            }),
            main_image_index: Some(1),
            ..Default::default()
        };

        let view = product_view(&product, Some(&entry));
        assert_eq!(view.name, "Acrylic Stand Premium");
        assert_eq!(view.price, 95000.0);
        assert!(!view.active);
        assert!(!view.show_in_gallery);
        assert!(view.frames.glass && view.frames.acrylic);
        assert_eq!(view.main_image.as_deref(), Some("/images/products/acrylic-stand-2.jpg"));
    }

    #[test]
    fn test_out_of_range_image_index_falls_back_to_first() {
        let product = stand();
        let entry = OverrideEntry {
            main_image_index: Some(9),
            ..Default::default()
        };
        let view = product_view(&product, Some(&entry));
        assert_eq!(view.main_image.as_deref(), Some("/images/products/acrylic-stand.jpg"));
    }
}
