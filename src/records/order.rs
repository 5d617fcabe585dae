use std::collections::HashMap;

use crate::utils::format_rupiah;

/// Largest quantity a single catalog entry can be ordered in.
pub const MAX_QUANTITY: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: u64,
}

/// Fixed list of sellable items. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, keeping the first entry for any repeated name.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.iter().any(|existing| existing.name == entry.name) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    pub fn thrift() -> Self {
        let items: [(&str, u64); 6] = [
            ("Kaos Vintage", 50_000),
            ("Jaket Denim", 150_000),
            ("Sepatu Kets", 120_000),
            ("Tas Selempang", 75_000),
            ("Kacamata Retro", 60_000),
            ("Jam Tangan Klasik", 85_000),
        ];
        Self::new(
            items
                .iter()
                .map(|(name, unit_price)| CatalogEntry {
                    name: (*name).to_string(),
                    unit_price: *unit_price,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Quantity in `0..=MAX_QUANTITY`. Values outside the range cannot be constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u8);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: u32) -> Self {
        Quantity(value.min(MAX_QUANTITY as u32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Quantity((self.0 + 1).min(MAX_QUANTITY))
    }

    pub fn decrement(self) -> Self {
        Quantity(self.0.saturating_sub(1))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

/// Current quantity per catalog item name. Unknown names read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySelection {
    quantities: HashMap<String, Quantity>,
}

impl QuantitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item: &str) -> Quantity {
        self.quantities.get(item).copied().unwrap_or_default()
    }

    pub fn set(&mut self, item: &str, quantity: Quantity) {
        if quantity.is_positive() {
            self.quantities.insert(item.to_string(), quantity);
        } else {
            self.quantities.remove(item);
        }
    }

    pub fn increment(&mut self, item: &str) {
        let next = self.get(item).increment();
        self.set(item, next);
    }

    pub fn decrement(&mut self, item: &str) {
        let next = self.get(item).decrement();
        self.set(item, next);
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

impl<'a> FromIterator<(&'a str, u32)> for QuantitySelection {
    fn from_iter<T: IntoIterator<Item = (&'a str, u32)>>(iter: T) -> Self {
        let mut selection = QuantitySelection::new();
        for (item, qty) in iter {
            selection.set(item, Quantity::new(qty));
        }
        selection
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u8,
    pub unit_price: u64,
    pub line_total: u64,
}

impl OrderLine {
    pub fn describe(&self) -> String {
        format!(
            "{} x {} = {}",
            self.item,
            self.quantity,
            format_rupiah(self.line_total)
        )
    }
}

/// Order as derived from the current selection. `Empty` is distinct from a zero total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSummary {
    Empty,
    Lines { lines: Vec<OrderLine>, total: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub items: usize,
    pub total: u64,
}

impl OrderConfirmation {
    pub fn message(&self) -> &'static str {
        "Pesanan thrift Anda telah diterima! Terima kasih sudah belanja."
    }
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, OrderSummary::Empty)
    }

    pub fn total(&self) -> Option<u64> {
        match self {
            OrderSummary::Empty => None,
            OrderSummary::Lines { total, .. } => Some(*total),
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        match self {
            OrderSummary::Empty => &[],
            OrderSummary::Lines { lines, .. } => lines,
        }
    }

    /// Confirm the order. The empty order cannot be submitted.
    pub fn submit(&self) -> Option<OrderConfirmation> {
        match self {
            OrderSummary::Empty => None,
            OrderSummary::Lines { lines, total } => Some(OrderConfirmation {
                items: lines.len(),
                total: *total,
            }),
        }
    }
}

/// Derive the order from the current quantities, in catalog order.
pub fn summarize(catalog: &Catalog, selection: &QuantitySelection) -> OrderSummary {
    let lines: Vec<OrderLine> = catalog
        .entries()
        .iter()
        .filter_map(|entry| {
            let quantity = selection.get(&entry.name);
            quantity.is_positive().then(|| OrderLine {
                item: entry.name.clone(),
                quantity: quantity.get(),
                unit_price: entry.unit_price,
                line_total: u64::from(quantity.get()) * entry.unit_price,
            })
        })
        .collect();

    if lines.is_empty() {
        return OrderSummary::Empty;
    }

    let total = lines.iter().map(|line| line.line_total).sum();
    OrderSummary::Lines { lines, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_items_scenario() {
        let catalog = Catalog::thrift();
        let selection: QuantitySelection =
            [("Kaos Vintage", 2), ("Jaket Denim", 1)].into_iter().collect();

        let summary = summarize(&catalog, &selection);
        let totals: Vec<u64> = summary.lines().iter().map(|l| l.line_total).collect();
        assert_eq!(totals, vec![100_000, 150_000]);
        assert_eq!(summary.total(), Some(250_000));
        assert_eq!(summary.lines()[0].describe(), "Kaos Vintage x 2 = Rp 100,000");
    }

    #[test]
    fn all_zero_is_empty_not_zero_total() {
        let catalog = Catalog::thrift();
        let summary = summarize(&catalog, &QuantitySelection::new());
        assert_eq!(summary, OrderSummary::Empty);
        assert_eq!(summary.total(), None);
        assert!(summary.submit().is_none());
    }

    #[test]
    fn total_matches_sum_for_every_single_item_quantity() {
        let catalog = Catalog::thrift();
        for entry in catalog.entries() {
            for qty in 0..=u32::from(MAX_QUANTITY) {
                let selection: QuantitySelection =
                    [(entry.name.as_str(), qty)].into_iter().collect();
                let summary = summarize(&catalog, &selection);
                if qty == 0 {
                    assert!(summary.is_empty());
                } else {
                    assert_eq!(summary.total(), Some(u64::from(qty) * entry.unit_price));
                    assert_eq!(summary.lines().len(), 1);
                }
            }
        }
    }

    #[test]
    fn full_basket_sums_visible_lines() {
        let catalog = Catalog::thrift();
        let mut selection = QuantitySelection::new();
        for (idx, entry) in catalog.entries().iter().enumerate() {
            selection.set(&entry.name, Quantity::new(idx as u32));
        }

        let summary = summarize(&catalog, &selection);
        let expected: u64 = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| idx as u64 * entry.unit_price)
            .sum();
        assert_eq!(summary.lines().len(), catalog.len() - 1);
        assert_eq!(summary.total(), Some(expected));
        let confirmation = summary.submit().expect("non-empty order submits");
        assert_eq!(confirmation.total, expected);
        assert_eq!(confirmation.items, catalog.len() - 1);
    }

    #[test]
    fn quantity_is_clamped_to_range() {
        assert_eq!(Quantity::new(42).get(), MAX_QUANTITY);
        assert_eq!(Quantity::new(10).increment().get(), MAX_QUANTITY);
        assert_eq!(Quantity::ZERO.decrement().get(), 0);

        let mut selection = QuantitySelection::new();
        for _ in 0..15 {
            selection.increment("Sepatu Kets");
        }
        assert_eq!(selection.get("Sepatu Kets").get(), MAX_QUANTITY);
        selection.decrement("Sepatu Kets");
        assert_eq!(selection.get("Sepatu Kets").get(), 9);
    }

    #[test]
    fn unknown_items_do_not_affect_the_order() {
        let catalog = Catalog::thrift();
        let selection: QuantitySelection = [("Topi Bekas", 3)].into_iter().collect();
        assert!(summarize(&catalog, &selection).is_empty());
    }

    #[test]
    fn catalog_keeps_names_unique() {
        let catalog = Catalog::new(vec![
            CatalogEntry {
                name: "A".to_string(),
                unit_price: 1,
            },
            CatalogEntry {
                name: "A".to_string(),
                unit_price: 2,
            },
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("A").map(|e| e.unit_price), Some(1));
        assert_eq!(Catalog::thrift().len(), 6);
    }
}
