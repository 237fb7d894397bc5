use crate::model::{Id, Selection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cart line as submitted by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: Id,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub options: Selection,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_id: Id,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    pub options: Selection,
}

/// A priced cart; the invoice renderer consumes this as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Id,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
}
