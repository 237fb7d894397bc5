use crate::logic::money::{to_decimal, to_f64};
use crate::logic::resolve::{flat_price, OptionResolver};
use crate::model::{
    Category, OverrideEntry, OverrideMap, PriceList, Product, ResolvedOptions, Selection,
};

/// Option group consulted for Acrylic Stand prices.
pub const STAND_TYPE_GROUP: &str = "stand_type";

/// Computes unit prices from resolved options and a customer's selection.
///
/// Every exit is numeric; unknown products and unmatched selections price
/// at `0` or at the flat fallback, depending on the category.
pub struct PriceCalculator<'a> {
    resolver: OptionResolver<'a>,
}

impl<'a> PriceCalculator<'a> {
    pub fn new(price_list: &'a PriceList) -> Self {
        Self {
            resolver: OptionResolver::new(price_list),
        }
    }

    /// Price `product_id` against a full override snapshot. Unknown ids price at `0`.
    pub fn calculate(
        &self,
        products: &[Product],
        overrides: &OverrideMap,
        product_id: &str,
        selection: &Selection,
    ) -> f64 {
        match products.iter().find(|p| p.id == product_id) {
            Some(product) => self.price(product, overrides.get(product_id), selection),
            None => {
                log::debug!("price requested for unknown product '{}'", product_id);
                0.0
            }
        }
    }

    /// Price one product given its override entry.
    pub fn price(
        &self,
        product: &Product,
        entry: Option<&OverrideEntry>,
        selection: &Selection,
    ) -> f64 {
        let flat = flat_price(product, entry);
        let resolved = self.resolver.resolve(product, entry);

        match &product.category {
            Category::TwoDFrame => layered_price(flat, &resolved, selection),
            Category::ThreeDFrame => single_variant_price(flat, &resolved, selection),
            Category::AcrylicStand => stand_type_price(&resolved, selection),
            Category::Additional => first_selection_price(flat, &resolved, selection),
            Category::SoftcopyDesign | Category::Other(_) => flat,
        }
    }
}

/// 2D Frame: start from the base price and walk groups in order. A matched
/// `override` option replaces the running total; any other mode adds to it.
fn layered_price(flat: f64, resolved: &ResolvedOptions, selection: &Selection) -> f64 {
    if resolved.groups.is_empty() {
        return flat;
    }
    let base = resolved.base_price.unwrap_or(flat);
    if selection.is_empty() {
        return base;
    }

    let total = resolved.groups.iter().fold(to_decimal(base), |total, group| {
        let chosen = selection
            .get(&group.id)
            .and_then(|value| group.find_active(value));
        match chosen {
            Some(option) if option.is_override() => to_decimal(option.price_or_zero()),
            Some(option) => total + to_decimal(option.price_or_zero()),
            None => total,
        }
    });
    to_f64(total)
}

/// 3D Frame: only the first group is consulted, and only an `override`
/// option changes the price. Options are never added up.
fn single_variant_price(flat: f64, resolved: &ResolvedOptions, selection: &Selection) -> f64 {
    let Some(first) = resolved.groups.first() else {
        return flat;
    };
    if selection.is_empty() {
        return flat;
    }

    selection
        .get(&first.id)
        .and_then(|value| first.find_active(value))
        .filter(|option| option.is_override())
        .map_or(flat, |option| option.price_or_zero())
}

/// Acrylic Stand: the `stand_type` group alone decides. No catalog fallback.
fn stand_type_price(resolved: &ResolvedOptions, selection: &Selection) -> f64 {
    let Some(value) = selection.get(STAND_TYPE_GROUP) else {
        return 0.0;
    };

    resolved
        .groups
        .iter()
        .find(|group| group.id == STAND_TYPE_GROUP)
        .and_then(|group| group.find_active(value))
        .filter(|option| option.is_override())
        .map_or(0.0, |option| option.price_or_zero())
}

/// Additional: the first selection entry, whatever its key, is matched
/// against the first group.
// NOTE: depends on selection order and ignores the key on purpose; changing
// this would reprice existing carts.
fn first_selection_price(flat: f64, resolved: &ResolvedOptions, selection: &Selection) -> f64 {
    let Some(first) = resolved.groups.first() else {
        return flat;
    };
    if !selection.has_any_value() {
        return 0.0;
    }

    selection
        .first_value()
        .and_then(|value| first.find_active(value))
        .filter(|option| option.is_override())
        .map_or(0.0, |option| option.price_or_zero())
}
