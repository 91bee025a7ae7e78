//! Products domain module.
//!
//! This crate contains business rules for products and their sales history,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod store;

pub use product::{Product, SaleRecord, SalesLedger};
pub use store::ProductStore;
