//! Selection Cart
//!
//! The user's in-progress selection of catalog items with quantities.
//! At most one line exists per catalog item id; repeat adds increment
//! the existing line.

use shared::models::CatalogItem;

/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// One selected item with its quantity (always ≥ 1 while the line exists)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CatalogItem,
    pub quantity: i32,
}

/// Ordered collection of selection lines
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add one unit of an item
    ///
    /// A repeat add increments the existing line instead of creating a
    /// second one.
    pub fn add_item(&mut self, item: CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_QUANTITY);
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
    }

    /// Adjust a line's quantity by `delta`
    ///
    /// Dropping to zero or below removes the line entirely rather than
    /// clamping at zero. Unknown ids are ignored.
    pub fn change_quantity(&mut self, item_id: &str, delta: i32) {
        let Some(pos) = self.lines.iter().position(|line| line.item.id == item_id) else {
            return;
        };

        let line = &mut self.lines[pos];
        line.quantity = line.quantity.saturating_add(delta).min(MAX_QUANTITY);
        if line.quantity <= 0 {
            self.lines.remove(pos);
        }
    }

    /// Remove a line unconditionally
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item.id != item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
