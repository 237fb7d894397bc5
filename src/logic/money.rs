//! Money arithmetic. Prices travel as `f64`; sums and products are taken in
//! `Decimal` and rounded back at the edge.

use rust_decimal::prelude::*;

/// Rounding precision for prices handed back to callers.
const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to two decimal places, half away from zero.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `unit * quantity`.
pub fn line_total(unit: f64, quantity: u32) -> f64 {
    to_f64(to_decimal(unit) * Decimal::from(quantity))
}

/// Sum of prices.
pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    to_f64(values.into_iter().map(to_decimal).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_sum_is_exact() {
        assert_eq!(sum([0.1, 0.2]), 0.3);
        assert_eq!(sum(Vec::new()), 0.0);
    }

    #[test]
    fn test_line_total_rounds_to_cents() {
        assert_eq!(line_total(0.1, 3), 0.3);
        assert_eq!(line_total(150000.0, 2), 300000.0);
    }
}
