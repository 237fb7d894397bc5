//! Fallback chains used when merging admin overrides onto catalog options.
//!
//! Each function takes its candidates in precedence order; the first present
//! one wins.

use crate::model::{
    GroupOverride, ItemOverride, LocalizedText, OptionGroup, PriceMode, ProductOption,
};

/// First present value of an ordered candidate list.
pub fn first_present<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Override label, then catalog label, then the raw value in both languages.
pub fn label(item: &ItemOverride, default: Option<&ProductOption>) -> LocalizedText {
    first_present([item.label.clone(), default.map(|o| o.label.clone())])
        .unwrap_or_else(|| LocalizedText::same(&item.value))
}

/// Override image, then catalog image.
pub fn image(item: &ItemOverride, default: Option<&ProductOption>) -> Option<String> {
    first_present([item.image.clone(), default.and_then(|o| o.image.clone())])
}

/// Override preview, then catalog preview.
pub fn preview(item: &ItemOverride, default: Option<&ProductOption>) -> Option<String> {
    first_present([item.preview.clone(), default.and_then(|o| o.preview.clone())])
}

/// Explicit override price, then price list, then catalog price.
pub fn price(
    item: &ItemOverride,
    listed: Option<f64>,
    default: Option<&ProductOption>,
) -> Option<f64> {
    first_present([item.price, listed, default.and_then(|o| o.price)])
}

/// Price for an option that has no override item: price list, then catalog price.
pub fn refreshed_price(listed: Option<f64>, default: &ProductOption) -> Option<f64> {
    first_present([listed, default.price])
}

/// Override mode, then catalog mode, then replace.
pub fn price_mode(item: &ItemOverride, default: Option<&ProductOption>) -> PriceMode {
    first_present([item.price_mode, default.and_then(|o| o.price_mode)])
        .unwrap_or(PriceMode::Override)
}

/// First override item not explicitly disabled, then the override group's
/// default, then the catalog group's default.
pub fn default_value(group: &GroupOverride, default: &OptionGroup) -> Option<String> {
    let first_active = group
        .items()
        .and_then(|items| items.iter().find(|item| item.active != Some(false)))
        .map(|item| item.value.clone());
    first_present([
        first_active,
        group.default_value.clone(),
        default.default_value.clone(),
    ])
}
