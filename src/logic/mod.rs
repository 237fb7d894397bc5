pub mod money;
pub mod precedence;
pub mod price_list;
pub mod pricing;
pub mod quote;
pub mod resolve;
pub mod service;
pub mod storefront;

pub use price_list::PriceListLookup;
pub use pricing::{PriceCalculator, STAND_TYPE_GROUP};
pub use quote::QuoteError;
pub use resolve::{flat_price, OptionResolver};
pub use service::{PricingError, StorefrontService};
pub use storefront::{is_active, product_view, ProductView};
