use std::collections::HashMap;

use stockpilot_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// In-memory product registry.
///
/// The surrounding application owns one of these and passes products (or the
/// store itself) by reference into the forecasting calls; there is no global
/// registry. Insertion rejects duplicate identifiers; no delete exists.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: HashMap<ProductId, Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product. Fails with a conflict if the id is already taken.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id_typed().clone();
        if self.products.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "product {id} already exists"
            )));
        }
        self.products.insert(id, product);
        Ok(())
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.get_mut(id)
    }

    /// Like `get`, but a missing id is an error (for callers acting on a
    /// specific product, e.g. recording a sale against an id from a request).
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.products
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn require_mut(&mut self, id: &ProductId) -> DomainResult<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
