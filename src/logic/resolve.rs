use crate::logic::precedence;
use crate::logic::price_list::PriceListLookup;
use crate::model::{
    GroupOverride, ItemOverride, OptionGroup, OverrideEntry, PriceList, Product, ProductOption,
    ResolvedOptions,
};

/// Merges a product's catalog option groups with its admin override entry.
///
/// Pure over its inputs: the caller supplies the override snapshot it read for
/// this request.
pub struct OptionResolver<'a> {
    prices: PriceListLookup<'a>,
}

impl<'a> OptionResolver<'a> {
    pub fn new(price_list: &'a PriceList) -> Self {
        Self {
            prices: PriceListLookup::new(price_list),
        }
    }

    /// Resolve every catalog group of `product`, in catalog order.
    ///
    /// Override groups only reshape groups the catalog already has; an
    /// override group with an unknown id is ignored.
    pub fn resolve(&self, product: &Product, entry: Option<&OverrideEntry>) -> ResolvedOptions {
        let groups = product
            .options
            .variations
            .iter()
            .map(|group| {
                let over = entry.and_then(|e| e.group(&group.id));
                self.resolve_group(product, group, over)
            })
            .collect();

        ResolvedOptions {
            base_price: Some(flat_price(product, entry)),
            groups,
        }
    }

    fn resolve_group(
        &self,
        product: &Product,
        group: &OptionGroup,
        over: Option<&GroupOverride>,
    ) -> OptionGroup {
        let Some(over) = over else {
            return OptionGroup {
                id: group.id.clone(),
                default_value: group.default_value.clone(),
                options: self.refresh_options(product, group),
            };
        };

        let options = match over.items() {
            Some(items) => items
                .iter()
                .map(|item| self.merge_item(product, item, group.find(&item.value)))
                .collect(),
            None => self.refresh_options(product, group),
        };

        OptionGroup {
            id: group.id.clone(),
            default_value: precedence::default_value(over, group),
            options,
        }
    }

    /// Catalog options with prices refreshed from the price list.
    fn refresh_options(&self, product: &Product, group: &OptionGroup) -> Vec<ProductOption> {
        group
            .options
            .iter()
            .map(|option| {
                let listed = self.listed_price(product, &option.value);
                ProductOption {
                    price: precedence::refreshed_price(listed, option),
                    ..option.clone()
                }
            })
            .collect()
    }

    fn merge_item(
        &self,
        product: &Product,
        item: &ItemOverride,
        default: Option<&ProductOption>,
    ) -> ProductOption {
        let listed = self.listed_price(product, &item.value);
        let price = precedence::price(item, listed, default).unwrap_or_else(|| {
            // Neither the admin, the price list nor the catalog priced this item.
            self.prices
                .lookup(product.category.as_str(), &product.name, Some(&item.value))
        });

        ProductOption {
            value: item.value.clone(),
            label: precedence::label(item, default),
            image: precedence::image(item, default),
            preview: precedence::preview(item, default),
            price: Some(price),
            price_mode: Some(precedence::price_mode(item, default)),
            active: item.active,
        }
    }

    fn listed_price(&self, product: &Product, value: &str) -> Option<f64> {
        let listed = self
            .prices
            .find(product.category.as_str(), &product.name, Some(value));
        if listed.is_none() {
            log::debug!(
                "product '{}': no price list entry for option '{}'",
                product.id,
                value
            );
        }
        listed
    }
}

/// Admin override price when numeric, otherwise the catalog price.
pub fn flat_price(product: &Product, entry: Option<&OverrideEntry>) -> f64 {
    entry.and_then(|e| e.price).unwrap_or(product.price)
}
