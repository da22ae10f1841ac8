//! Price Resolution
//!
//! Indexes the raw price list once per load and resolves catalog items
//! to their price records.

use rust_decimal::prelude::*;
use shared::models::{CatalogItem, PriceRecord};
use std::collections::HashMap;

use super::breakdown::to_decimal;

/// Price records indexed for item lookup
///
/// Built once per price-list load. When two records share an item id or
/// a normalized name, the first record in list order wins and later
/// duplicates are never consulted.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    records: Vec<PriceRecord>,
    by_item_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PriceBook {
    /// Index a raw price list
    ///
    /// Records whose full price is not finite or is negative are skipped;
    /// they would otherwise poison every total they touch.
    pub fn build(records: Vec<PriceRecord>) -> Self {
        let mut book = Self::default();

        for record in records {
            if !record.full_price.is_finite() || record.full_price < 0.0 {
                tracing::warn!(
                    name = %record.name,
                    full_price = record.full_price,
                    "Skipping price record with invalid full price"
                );
                continue;
            }

            let idx = book.records.len();
            if let Some(item_id) = &record.item_id {
                book.by_item_id.entry(item_id.clone()).or_insert(idx);
            }
            book.by_name.entry(normalize_name(&record.name)).or_insert(idx);
            book.records.push(record);
        }

        book
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve an item to its price record
    ///
    /// Exact identifier match first, trimmed case-insensitive name match
    /// second. Returns `None` when neither key is present; items without
    /// a record stay addable and price at zero.
    pub fn resolve(&self, item: &CatalogItem) -> Option<&PriceRecord> {
        if let Some(&idx) = self.by_item_id.get(&item.id) {
            return Some(&self.records[idx]);
        }
        self.by_name
            .get(&normalize_name(&item.name))
            .map(|&idx| &self.records[idx])
    }
}

/// Per-unit discount for a resolved record
///
/// Upstream data sometimes carries only a discount amount
/// (`discount_value`) and sometimes only a discounted absolute price
/// (`discount_price`); exactly one path applies, never both.
pub fn per_unit_discount(record: &PriceRecord) -> Decimal {
    if let Some(value) = record.discount_value
        && value > 0.0
    {
        return to_decimal(value);
    }

    if let Some(discounted) = record.discount_price
        && record.full_price > discounted
    {
        return to_decimal(record.full_price) - to_decimal(discounted);
    }

    Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn make_record(item_id: Option<&str>, name: &str, full_price: f64) -> PriceRecord {
        PriceRecord {
            item_id: item_id.map(|s| s.to_string()),
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

    #[test]
    fn test_resolve_by_id_first() {
        // Name points at one record, id at another; id wins
        let by_name = make_record(None, "Shirt", 300.0);
        let by_id = make_record(Some("item-1"), "Formal Shirt", 500.0);
        let book = PriceBook::build(vec![by_name, by_id]);

        let record = book.resolve(&make_item("item-1", "Shirt")).unwrap();
        assert_eq!(record.full_price, 500.0);
    }

    #[test]
    fn test_resolve_by_trimmed_name() {
        let book = PriceBook::build(vec![make_record(None, "  Formal Shirt ", 450.0)]);

        let record = book.resolve(&make_item("x", "formal shirt")).unwrap();
        assert_eq!(record.full_price, 450.0);
    }

    #[test]
    fn test_no_match() {
        let book = PriceBook::build(vec![make_record(Some("item-1"), "Shirt", 500.0)]);
        assert!(book.resolve(&make_item("item-2", "Trousers")).is_none());
    }

    #[test]
    fn test_first_record_wins_on_duplicate() {
        let first = make_record(Some("item-1"), "Shirt", 500.0);
        let second = make_record(Some("item-1"), "Shirt", 900.0);
        let book = PriceBook::build(vec![first, second]);

        assert_eq!(book.len(), 2);
        let record = book.resolve(&make_item("item-1", "Shirt")).unwrap();
        assert_eq!(record.full_price, 500.0);
    }

    #[test]
    fn test_invalid_full_price_skipped() {
        let nan = make_record(Some("item-1"), "Broken", f64::NAN);
        let negative = make_record(Some("item-2"), "Negative", -10.0);
        let ok = make_record(Some("item-3"), "Shirt", 500.0);
        let book = PriceBook::build(vec![nan, negative, ok]);

        assert_eq!(book.len(), 1);
        assert!(book.resolve(&make_item("item-1", "Broken")).is_none());
        assert!(book.resolve(&make_item("item-2", "Negative")).is_none());
        assert!(book.resolve(&make_item("item-3", "Shirt")).is_some());
    }

    #[test]
    fn test_discount_value_path() {
        let mut record = make_record(None, "Shirt", 500.0);
        record.discount_value = Some(50.0);
        assert_eq!(per_unit_discount(&record), Decimal::from(50));
    }

    #[test]
    fn test_discount_price_path() {
        let mut record = make_record(None, "Shirt", 500.0);
        record.discount_price = Some(420.0);
        assert_eq!(per_unit_discount(&record), Decimal::from(80));
    }

    #[test]
    fn test_discount_value_wins_over_price() {
        // Both encodings present: the amount wins, no double count
        let mut record = make_record(None, "Shirt", 500.0);
        record.discount_value = Some(50.0);
        record.discount_price = Some(420.0);
        assert_eq!(per_unit_discount(&record), Decimal::from(50));
    }

    #[test]
    fn test_no_discount() {
        let record = make_record(None, "Shirt", 500.0);
        assert_eq!(per_unit_discount(&record), Decimal::ZERO);

        // Discounted price above full price is not a discount
        let mut inflated = make_record(None, "Shirt", 500.0);
        inflated.discount_price = Some(600.0);
        assert_eq!(per_unit_discount(&inflated), Decimal::ZERO);

        // Zero discount value falls through to nothing
        let mut zero = make_record(None, "Shirt", 500.0);
        zero.discount_value = Some(0.0);
        assert_eq!(per_unit_discount(&zero), Decimal::ZERO);
    }
}
