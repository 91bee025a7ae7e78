use std::collections::HashMap;

use stockpilot_core::{DomainError, DomainResult, SupplierId};

use crate::supplier::Supplier;

/// In-memory supplier registry.
///
/// Same shape and rules as the product store: explicit ownership by the
/// caller, duplicate-id conflicts, no delete.
#[derive(Debug, Clone, Default)]
pub struct SupplierStore {
    suppliers: HashMap<SupplierId, Supplier>,
}

impl SupplierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a supplier. Fails with a conflict if the id is already taken.
    pub fn insert(&mut self, supplier: Supplier) -> DomainResult<()> {
        let id = supplier.id_typed().clone();
        if self.suppliers.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "supplier {id} already exists"
            )));
        }
        self.suppliers.insert(id, supplier);
        Ok(())
    }

    pub fn get(&self, id: &SupplierId) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    pub fn get_mut(&mut self, id: &SupplierId) -> Option<&mut Supplier> {
        self.suppliers.get_mut(id)
    }

    /// Like `get`, but a missing id is an error.
    pub fn require(&self, id: &SupplierId) -> DomainResult<&Supplier> {
        self.suppliers
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("supplier {id}")))
    }

    pub fn require_mut(&mut self, id: &SupplierId) -> DomainResult<&mut Supplier> {
        self.suppliers
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("supplier {id}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}
