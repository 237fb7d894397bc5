pub mod common;
pub mod overrides;
pub mod product;
pub mod quote;
pub mod selection;

pub use common::*;
pub use overrides::*;
pub use product::*;
pub use quote::*;
pub use selection::*;

use std::collections::BTreeMap;

/// Flat price list: category -> variant label -> price.
pub type PriceList = BTreeMap<String, BTreeMap<String, f64>>;
