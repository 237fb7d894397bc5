use crate::logic::money;
use crate::logic::pricing::PriceCalculator;
use crate::logic::service::{PricingError, StorefrontService};
use crate::logic::storefront::product_view;
use crate::model::{CartLine, Quote, QuoteLine};
use crate::store::{CatalogStore, OverrideStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("line {line}: quantity must be at least 1")]
    ZeroQuantity { line: usize },

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl<C: CatalogStore, O: OverrideStore> StorefrontService<C, O> {
    /// Price every cart line through the preferred path and total them.
    pub async fn quote(&self, lines: &[CartLine]) -> Result<Quote, QuoteError> {
        if lines.is_empty() {
            return Err(QuoteError::EmptyCart);
        }
        if let Some(line) = lines.iter().position(|l| l.quantity == 0) {
            return Err(QuoteError::ZeroQuantity { line });
        }

        // One snapshot for the whole cart.
        let overrides = self
            .overrides()
            .load_overrides()
            .await
            .map_err(PricingError::from)?;

        let calculator = PriceCalculator::new(self.catalog().price_list());
        let mut priced = Vec::with_capacity(lines.len());
        for line in lines {
            let (product, entry) = self.active_in(&overrides, &line.product_id)?;
            let unit_price = calculator.price(product, entry, &line.options);
            priced.push(QuoteLine {
                product_id: product.id.clone(),
                name: product_view(product, entry).name,
                quantity: line.quantity,
                unit_price,
                line_total: money::line_total(unit_price, line.quantity),
                options: line.options.clone(),
            });
        }

        let subtotal = money::sum(priced.iter().map(|line| line.line_total));
        Ok(Quote {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now(),
            lines: priced,
            subtotal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::StoreError;
    use crate::model::{OverrideEntry, OverrideMap, Selection};
    use crate::store::MemoryOverrideStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn service() -> StorefrontService<Catalog, MemoryOverrideStore> {
        StorefrontService::new(
            Arc::new(Catalog::builtin()),
            Arc::new(MemoryOverrideStore::new()),
        )
    }

    fn line(product_id: &str, quantity: u32, options: Selection) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            quantity,
            options,
        }
    }

    #[tokio::test]
    async fn test_quote_totals_lines() {
        let service = service();
        service.overrides().put(
            "frame-2d",
            OverrideEntry {
                display_name: Some("Bingkai 2D Classic".to_string()),
                ..Default::default()
            },
        );

        let quote = service
            .quote(&[
                line("frame-2d", 2, Selection::new().with("size", "12R")),
                line("acrylic-stand", 1, Selection::new().with("stand_type", "a5")),
                line("additional-service", 1, Selection::new().with("service", "ekspress")),
            ])
            .await
            .unwrap();

        assert_eq!(quote.lines.len(), 3);
        assert_eq!(quote.lines[0].name, "Bingkai 2D Classic");
        assert_eq!(quote.lines[0].unit_price, 175000.0);
        assert_eq!(quote.lines[0].line_total, 350000.0);
        assert_eq!(quote.subtotal, 350000.0 + 85000.0 + 50000.0);
        assert!(uuid::Uuid::parse_str(&quote.id).is_ok());
    }

    /// Counts snapshot reads.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryOverrideStore,
        loads: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl OverrideStore for CountingStore {
        async fn load_overrides(&self) -> Result<OverrideMap, StoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load_overrides().await
        }

        async fn save_overrides(&self, overrides: &OverrideMap) -> Result<(), StoreError> {
            self.inner.save_overrides(overrides).await
        }
    }

    #[tokio::test]
    async fn test_quote_reads_one_snapshot_for_the_whole_cart() {
        let store = Arc::new(CountingStore::default());
        let service = StorefrontService::new(Arc::new(Catalog::builtin()), Arc::clone(&store));

        service
            .quote(&[
                line("frame-3d", 1, Selection::new()),
                line("frame-2d", 1, Selection::new()),
                line("softcopy-design", 1, Selection::new()),
            ])
            .await
            .unwrap();

        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_quote_fractional_totals_are_exact() {
        let service = service();
        service.overrides().put(
            "softcopy-design",
            OverrideEntry {
                price: Some(0.1),
                ..Default::default()
            },
        );
        service.overrides().put(
            "frame-3d",
            OverrideEntry {
                price: Some(0.2),
                ..Default::default()
            },
        );

        let quote = service
            .quote(&[
                line("softcopy-design", 3, Selection::new()),
                line("frame-3d", 1, Selection::new()),
            ])
            .await
            .unwrap();

        assert_eq!(quote.lines[0].line_total, 0.3);
        assert_eq!(quote.subtotal, 0.5);
    }

    #[tokio::test]
    async fn test_quote_rejects_bad_lines() {
        let service = service();

        assert!(matches!(service.quote(&[]).await, Err(QuoteError::EmptyCart)));

        let result = service
            .quote(&[
                line("frame-3d", 1, Selection::new()),
                line("frame-3d", 0, Selection::new()),
            ])
            .await;
        assert!(matches!(result, Err(QuoteError::ZeroQuantity { line: 1 })));

        let result = service.quote(&[line("ghost", 1, Selection::new())]).await;
        assert!(matches!(
            result,
            Err(QuoteError::Pricing(PricingError::ProductNotFound(_)))
        ));
    }
}
