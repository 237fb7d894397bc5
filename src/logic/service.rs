use crate::error::StoreError;
use crate::logic::pricing::PriceCalculator;
use crate::logic::resolve::OptionResolver;
use crate::logic::storefront::{is_active, product_view, ProductView};
use crate::model::{Id, OverrideEntry, OverrideMap, Product, ResolvedOptions, Selection};
use crate::store::{CatalogStore, OverrideStore};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("product '{0}' not found")]
    ProductNotFound(Id),

    #[error("product '{0}' is not active")]
    ProductInactive(Id),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-request orchestration over the catalog and the override store.
///
/// Holds no state of its own. Every call reads a fresh override snapshot, so
/// an admin save is visible to the very next request.
pub struct StorefrontService<C, O> {
    catalog: Arc<C>,
    overrides: Arc<O>,
}

impl<C, O> Clone for StorefrontService<C, O> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            overrides: Arc::clone(&self.overrides),
        }
    }
}

impl<C: CatalogStore, O: OverrideStore> StorefrontService<C, O> {
    pub fn new(catalog: Arc<C>, overrides: Arc<O>) -> Self {
        Self { catalog, overrides }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn overrides(&self) -> &O {
        &self.overrides
    }

    /// Resolved option groups for a catalog product.
    pub async fn resolve_product_options(
        &self,
        product: &Product,
    ) -> Result<ResolvedOptions, StoreError> {
        let entry = self.overrides.load_entry(&product.id).await?;
        let resolver = OptionResolver::new(self.catalog.price_list());
        Ok(resolver.resolve(product, entry.as_ref()))
    }

    /// Legacy price path: unknown products price at `0`, activity is not checked.
    pub async fn calculate_price(
        &self,
        product_id: &str,
        selection: &Selection,
    ) -> Result<f64, StoreError> {
        let overrides = self.overrides.load_overrides().await?;
        let calculator = PriceCalculator::new(self.catalog.price_list());
        Ok(calculator.calculate(self.catalog.products(), &overrides, product_id, selection))
    }

    /// Catalog product and its override entry, rejecting unknown and inactive ones.
    pub async fn active_product(
        &self,
        product_id: &str,
    ) -> Result<(&Product, Option<OverrideEntry>), PricingError> {
        let overrides = self.overrides.load_overrides().await?;
        let (product, entry) = self.active_in(&overrides, product_id)?;
        Ok((product, entry.cloned()))
    }

    /// Same check as [`active_product`](Self::active_product) against an
    /// override snapshot the caller already holds.
    pub fn active_in<'s, 'm>(
        &'s self,
        overrides: &'m OverrideMap,
        product_id: &str,
    ) -> Result<(&'s Product, Option<&'m OverrideEntry>), PricingError> {
        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| PricingError::ProductNotFound(product_id.to_string()))?;
        let entry = overrides.get(product_id);
        if !is_active(product, entry) {
            return Err(PricingError::ProductInactive(product_id.to_string()));
        }
        Ok((product, entry))
    }

    /// Resolved options for an active product.
    pub async fn product_options(&self, product_id: &str) -> Result<ResolvedOptions, PricingError> {
        let (product, entry) = self.active_product(product_id).await?;
        let resolver = OptionResolver::new(self.catalog.price_list());
        Ok(resolver.resolve(product, entry.as_ref()))
    }

    /// Preferred price path: not-found and inactive are reported before pricing.
    pub async fn price_product(
        &self,
        product_id: &str,
        selection: &Selection,
    ) -> Result<f64, PricingError> {
        let (product, entry) = self.active_product(product_id).await?;
        let calculator = PriceCalculator::new(self.catalog.price_list());
        Ok(calculator.price(product, entry.as_ref(), selection))
    }

    /// Storefront view of one active product.
    pub async fn product(&self, product_id: &str) -> Result<ProductView, PricingError> {
        let (product, entry) = self.active_product(product_id).await?;
        Ok(product_view(product, entry.as_ref()))
    }

    /// Storefront listing in catalog order.
    pub async fn list_products(
        &self,
        gallery_only: bool,
        include_inactive: bool,
    ) -> Result<Vec<ProductView>, StoreError> {
        let overrides = self.overrides.load_overrides().await?;
        Ok(self
            .catalog
            .products()
            .iter()
            .map(|product| product_view(product, overrides.get(&product.id)))
            .filter(|view| include_inactive || view.active)
            .filter(|view| !gallery_only || view.show_in_gallery)
            .collect())
    }
}
