use serde::{Deserialize, Serialize};

use stockpilot_core::{Entity, SupplierId, ValueObject};

/// One observed delivery event: lead time, order cost, quality rating.
///
/// `quality_rating` is nominally in \[1, 5\]; the range is a caller
/// precondition, not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub delivery_days: f64,
    pub cost: f64,
    pub quality_rating: f64,
}

impl ValueObject for DeliveryRecord {}

/// Append-only record of delivery observations for one supplier.
///
/// One record describes one delivery event, so lead time, cost, and quality
/// for event *i* always travel together (the record type makes the
/// equal-length invariant structural rather than maintained).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLedger {
    records: Vec<DeliveryRecord>,
}

impl DeliveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delivery observation. The sole mutation this type permits.
    pub fn append(&mut self, record: DeliveryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn mean_of(&self, field: impl Fn(&DeliveryRecord) -> f64) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(field).sum();
        Some(sum / self.records.len() as f64)
    }
}

/// Entity: Supplier.
///
/// Identifier and name are immutable; the only mutation is recording a
/// delivery event. No delete exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    deliveries: DeliveryLedger,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deliveries: DeliveryLedger::new(),
        }
    }

    pub fn id_typed(&self) -> &SupplierId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn deliveries(&self) -> &DeliveryLedger {
        &self.deliveries
    }

    /// Record one delivery event (lead time, cost, quality together).
    pub fn record_delivery(&mut self, delivery_days: f64, cost: f64, quality_rating: f64) {
        self.deliveries.append(DeliveryRecord {
            delivery_days,
            cost,
            quality_rating,
        });
    }

    /// Mean delivery lead time, or `None` when no deliveries are recorded.
    ///
    /// The `None` sentinel is deliberate: callers must be able to distinguish
    /// "no observations" from an observed mean of zero.
    pub fn average_delivery_time(&self) -> Option<f64> {
        self.deliveries.mean_of(|r| r.delivery_days)
    }

    /// Mean order cost, or `None` when no deliveries are recorded.
    pub fn average_cost(&self) -> Option<f64> {
        self.deliveries.mean_of(|r| r.cost)
    }

    /// Mean quality rating, or `None` when no deliveries are recorded.
    pub fn average_quality(&self) -> Option<f64> {
        self.deliveries.mean_of(|r| r.quality_rating)
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
