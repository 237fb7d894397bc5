//! Static catalog registry.
//!
//! Built once at startup, either from the compiled-in defaults or from a
//! JSON file, and shared read-only for the life of the process.

pub mod data;

use crate::error::StoreError;
use crate::model::{PriceList, Product};
use crate::store::CatalogStore;
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    price_list: PriceList,
}

/// On-disk catalog layout: `{ "products": [...], "priceList": {...} }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    price_list: PriceList,
}

impl Catalog {
    pub fn new(products: Vec<Product>, price_list: PriceList) -> Self {
        let catalog = Self {
            products,
            price_list,
        };
        catalog.warn_on_duplicates();
        catalog
    }

    /// The compiled-in storefront catalog.
    pub fn builtin() -> Self {
        Self::new(data::default_products(), data::default_price_list())
    }

    /// Load a catalog file. Called once at startup, so blocking IO is fine here.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(path, e))?;
        Ok(Self::new(file.products, file.price_list))
    }

    /// Use `path` when configured, the built-in catalog otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, StoreError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Uniqueness is expected of catalog data but never enforced.
    fn warn_on_duplicates(&self) {
        for id in self.products.iter().map(|p| &p.id).duplicates() {
            log::warn!("catalog contains duplicate product id '{}'", id);
        }
        for product in &self.products {
            for group in &product.options.variations {
                for value in group.options.iter().map(|o| &o.value).duplicates() {
                    log::warn!(
                        "product '{}' group '{}' repeats option value '{}'",
                        product.id,
                        group.id,
                        value
                    );
                }
            }
        }
    }
}

impl CatalogStore for Catalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn price_list(&self) -> &PriceList {
        &self.price_list
    }
}
