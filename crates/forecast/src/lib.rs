//! Demand forecasting for products.
//!
//! Deterministic analytics over the product sales ledger: a trend-adjusted
//! short-horizon demand forecast and a shelf-life-bounded recommended order
//! quantity, optionally perturbed by a weather signal. No IO of its own; the
//! weather collaborator is injected and its failures never surface here.

pub mod engine;

pub use engine::ForecastEngine;
