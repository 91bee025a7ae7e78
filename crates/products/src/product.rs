use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{Entity, ProductId, ValueObject};

/// One recorded sale: timestamp + quantity sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub occurred_at: DateTime<Utc>,
    pub quantity: i64,
}

impl ValueObject for SaleRecord {}

/// Append-only, timestamped record of quantities sold for one product.
///
/// Insertion order is chronological order (sales are recorded in real time).
/// Records are never reordered or mutated in place; the ledger only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sale record. The sole mutation this type permits.
    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// The last `min(n, len)` records, in chronological order.
    pub fn recent(&self, n: usize) -> &[SaleRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Entity: Product.
///
/// Identity and descriptive fields are immutable after construction; the only
/// mutation is recording a sale, which appends to the ledger and decrements
/// inventory. Inventory is signed and may go negative if oversold; the domain
/// does not correct that here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Option<String>,
    shelf_life_days: u32,
    inventory: i64,
    sales: SalesLedger,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        shelf_life_days: u32,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            shelf_life_days,
            inventory: 0,
            sales: SalesLedger::new(),
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn shelf_life_days(&self) -> u32 {
        self.shelf_life_days
    }

    pub fn inventory(&self) -> i64 {
        self.inventory
    }

    pub fn sales(&self) -> &SalesLedger {
        &self.sales
    }

    /// Record a sale at the current time.
    pub fn add_sale(&mut self, quantity: i64) {
        self.add_sale_at(quantity, Utc::now());
    }

    /// Record a sale with an explicit timestamp.
    ///
    /// Prefer this in tests for determinism. Callers are responsible for
    /// passing timestamps in chronological order.
    pub fn add_sale_at(&mut self, quantity: i64, occurred_at: DateTime<Utc>) {
        self.sales.append(SaleRecord {
            occurred_at,
            quantity,
        });
        self.inventory -= quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_product() -> Product {
        Product::new(ProductId::new("A1"), "Apple", 7, None)
    }

    #[test]
    fn new_product_starts_empty() {
        let product = test_product();
        assert_eq!(product.inventory(), 0);
        assert!(product.sales().is_empty());
        assert_eq!(product.shelf_life_days(), 7);
    }

    #[test]
    fn add_sale_appends_and_decrements_inventory() {
        let mut product = test_product();
        product.add_sale_at(10, test_time());
        product.add_sale_at(15, test_time());

        assert_eq!(product.inventory(), -25);
        assert_eq!(product.sales().len(), 2);
        assert_eq!(product.sales().records()[0].quantity, 10);
        assert_eq!(product.sales().records()[1].quantity, 15);
    }

    #[test]
    fn oversell_drives_inventory_negative() {
        let mut product = test_product();
        product.add_sale_at(3, test_time());
        assert_eq!(product.inventory(), -3);
    }

    #[test]
    fn recent_returns_chronological_tail() {
        let mut ledger = SalesLedger::new();
        for q in 1..=5 {
            ledger.append(SaleRecord {
                occurred_at: test_time(),
                quantity: q,
            });
        }

        let recent: Vec<i64> = ledger.recent(3).iter().map(|r| r.quantity).collect();
        assert_eq!(recent, vec![3, 4, 5]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn inventory_is_negated_sum_of_sales(quantities in proptest::collection::vec(0i64..1_000, 0..50)) {
                let mut product = test_product();
                for &q in &quantities {
                    product.add_sale_at(q, test_time());
                }

                let sold: i64 = quantities.iter().sum();
                prop_assert_eq!(product.inventory(), -sold);
                prop_assert_eq!(product.sales().len(), quantities.len());
            }

            #[test]
            fn recent_is_suffix_of_ledger(quantities in proptest::collection::vec(0i64..1_000, 0..50), n in 0usize..40) {
                let mut ledger = SalesLedger::new();
                for &q in &quantities {
                    ledger.append(SaleRecord { occurred_at: test_time(), quantity: q });
                }

                let recent = ledger.recent(n);
                prop_assert_eq!(recent.len(), n.min(quantities.len()));
                prop_assert_eq!(recent, &ledger.records()[quantities.len() - recent.len()..]);
            }
        }
    }

    #[test]
    fn recent_clamps_to_ledger_length() {
        let mut ledger = SalesLedger::new();
        ledger.append(SaleRecord {
            occurred_at: test_time(),
            quantity: 9,
        });

        assert_eq!(ledger.recent(30).len(), 1);
        assert_eq!(SalesLedger::new().recent(30).len(), 0);
    }
}
