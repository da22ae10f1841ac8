//! Order Breakdown
//!
//! Computes cart totals from the current lines and the price book.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::models::PriceBreakdown;

use super::cart::Cart;
use super::resolver::{PriceBook, per_unit_discount};
use crate::core::BookingConfig;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compute the breakdown for the current cart
///
/// Lines without a price record still count toward `total_item_count`
/// but contribute nothing to the totals; items stay addable even when
/// the price list lags behind the catalog. Pure: an unchanged cart and
/// book always produce an identical breakdown, so callers may recompute
/// on every input event.
///
/// An empty cart yields the zero breakdown; the fee applies only once
/// there is at least one line.
pub fn compute_breakdown(cart: &Cart, book: &PriceBook, config: &BookingConfig) -> PriceBreakdown {
    if cart.is_empty() {
        return PriceBreakdown::default();
    }

    let mut total_full = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut total_item_count: i32 = 0;

    for line in cart.lines() {
        total_item_count += line.quantity;

        let Some(record) = book.resolve(&line.item) else {
            tracing::debug!(
                item_id = %line.item.id,
                name = %line.item.name,
                "No price record for item, counted at zero"
            );
            continue;
        };

        let quantity = Decimal::from(line.quantity);
        total_full += to_decimal(record.full_price) * quantity;
        total_discount += per_unit_discount(record) * quantity;
    }

    let subtotal = total_full - total_discount;
    let fee = platform_fee(subtotal, config);
    let final_total = subtotal + fee;

    PriceBreakdown {
        total_full_price: to_f64(total_full),
        total_discount: to_f64(total_discount),
        platform_fee: to_f64(fee),
        final_total: to_f64(final_total),
        total_savings: to_f64(total_discount),
        total_item_count,
    }
}

/// Platform fee: a rate on the post-discount subtotal, rounded half-up
/// to whole currency units and floored at a flat minimum
fn platform_fee(subtotal: Decimal, config: &BookingConfig) -> Decimal {
    let fee = (subtotal * to_decimal(config.platform_fee_rate))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    fee.max(to_decimal(config.platform_fee_minimum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CatalogItem, PriceRecord};

    fn make_item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn make_record(item_id: &str, name: &str, full_price: f64) -> PriceRecord {
        PriceRecord {
            item_id: Some(item_id.to_string()),
            name: name.to_string(),
            full_price,
            discount_price: None,
            discount_type: None,
            discount_value: None,
            estimated_days: 7,
            is_available: true,
            notes: String::new(),
        }
    }

    fn config() -> BookingConfig {
        BookingConfig::default()
    }

    #[test]
    fn test_shirt_scenario() {
        // One line {Shirt, qty 2}, record {fullPrice 500, discountValue 50}
        // → 1000 full, 100 discount, fee max(7, round(0.01*900)) = 9, 909 total
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Shirt"));
        cart.change_quantity("item-1", 1);

        let mut record = make_record("item-1", "Shirt", 500.0);
        record.discount_value = Some(50.0);
        let book = PriceBook::build(vec![record]);

        let breakdown = compute_breakdown(&cart, &book, &config());

        assert_eq!(breakdown.total_full_price, 1000.0);
        assert_eq!(breakdown.total_discount, 100.0);
        assert_eq!(breakdown.platform_fee, 9.0);
        assert_eq!(breakdown.final_total, 909.0);
        assert_eq!(breakdown.total_savings, 100.0);
        assert_eq!(breakdown.total_item_count, 2);
    }

    #[test]
    fn test_fee_minimum() {
        // 1% of 100 is 1, floored at the flat minimum of 7
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Hemming"));
        let book = PriceBook::build(vec![make_record("item-1", "Hemming", 100.0)]);

        let breakdown = compute_breakdown(&cart, &book, &config());

        assert_eq!(breakdown.platform_fee, 7.0);
        assert_eq!(breakdown.final_total, 107.0);
    }

    #[test]
    fn test_final_total_identity() {
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Shirt"));
        cart.add_item(make_item("item-2", "Trousers"));
        cart.change_quantity("item-2", 2);

        let mut shirt = make_record("item-1", "Shirt", 750.0);
        shirt.discount_price = Some(600.0);
        let trousers = make_record("item-2", "Trousers", 1200.0);
        let book = PriceBook::build(vec![shirt, trousers]);

        let breakdown = compute_breakdown(&cart, &book, &config());

        assert_eq!(
            breakdown.final_total,
            breakdown.total_full_price - breakdown.total_discount + breakdown.platform_fee
        );
    }

    #[test]
    fn test_unpriced_line_counts_but_contributes_zero() {
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Shirt"));
        cart.add_item(make_item("item-2", "Mystery"));
        cart.change_quantity("item-2", 2);

        let book = PriceBook::build(vec![make_record("item-1", "Shirt", 500.0)]);

        let breakdown = compute_breakdown(&cart, &book, &config());

        assert_eq!(breakdown.total_item_count, 4);
        assert_eq!(breakdown.total_full_price, 500.0);
        assert_eq!(breakdown.total_discount, 0.0);
    }

    #[test]
    fn test_all_unpriced_still_pays_minimum_fee() {
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Mystery"));

        let breakdown = compute_breakdown(&cart, &PriceBook::default(), &config());

        assert_eq!(breakdown.total_item_count, 1);
        assert_eq!(breakdown.total_full_price, 0.0);
        assert_eq!(breakdown.platform_fee, 7.0);
        assert_eq!(breakdown.final_total, 7.0);
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let breakdown = compute_breakdown(&Cart::new(), &PriceBook::default(), &config());
        assert_eq!(breakdown, PriceBreakdown::default());
    }

    #[test]
    fn test_purity() {
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Shirt"));

        let mut record = make_record("item-1", "Shirt", 333.33);
        record.discount_value = Some(11.11);
        let book = PriceBook::build(vec![record]);

        let first = compute_breakdown(&cart, &book, &config());
        let second = compute_breakdown(&cart, &book, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_fee_rounding_half_up() {
        // Subtotal 1050 → 1% = 10.5 → rounds to 11
        let mut cart = Cart::new();
        cart.add_item(make_item("item-1", "Lehenga"));
        let book = PriceBook::build(vec![make_record("item-1", "Lehenga", 1050.0)]);

        let breakdown = compute_breakdown(&cart, &book, &config());

        assert_eq!(breakdown.platform_fee, 11.0);
        assert_eq!(breakdown.final_total, 1061.0);
    }
}
