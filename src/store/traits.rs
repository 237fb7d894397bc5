use crate::error::StoreError;
use crate::model::{OverrideEntry, OverrideMap, PriceList, Product};

/// Read-only access to the static catalog. Loaded once, never mutated.
pub trait CatalogStore: Send + Sync {
    /// Every catalog product, in catalog order.
    fn products(&self) -> &[Product];
    /// The flat category -> label -> price table.
    fn price_list(&self) -> &PriceList;

    fn product(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }
}

/// Admin override document access.
///
/// Implementations must not cache: every `load_overrides` call reflects the
/// most recently completed `save_overrides`.
#[async_trait::async_trait]
pub trait OverrideStore: Send + Sync {
    /// The full product id -> override mapping, read fresh.
    async fn load_overrides(&self) -> Result<OverrideMap, StoreError>;
    /// Replace the full mapping.
    async fn save_overrides(&self, overrides: &OverrideMap) -> Result<(), StoreError>;

    /// The override entry for one product, if any.
    async fn load_entry(&self, product_id: &str) -> Result<Option<OverrideEntry>, StoreError> {
        Ok(self.load_overrides().await?.remove(product_id))
    }
}
