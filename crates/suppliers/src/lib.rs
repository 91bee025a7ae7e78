//! Suppliers domain module.
//!
//! This crate contains business rules for suppliers and their delivery
//! performance history, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod store;
pub mod supplier;

pub use store::SupplierStore;
pub use supplier::{DeliveryLedger, DeliveryRecord, Supplier};
