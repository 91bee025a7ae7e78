//! Supplier scoring and ranking.
//!
//! Deterministic analytics over supplier delivery ledgers: a fixed-weight
//! linear score and a stable descending ranking.

pub mod ranker;

pub use ranker::{rank_suppliers, score};
