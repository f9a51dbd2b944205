//! # Order Store
//!
//! Persistence collaborator for committed orders.
//!
//! The engine treats the store's calls as atomic; backends beyond the
//! in-memory implementation (the dashboard's document database) are out of
//! scope here. `update` replaces the whole order: the aggregate is the
//! unit of consistency and its mutable subset (status, payments, returns,
//! void metadata) is only ever produced by lifecycle methods on a fetched
//! copy.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use optica_core::Order;

// =============================================================================
// Trait
// =============================================================================

/// Order persistence.
pub trait OrderStore: Send + Sync {
    /// Stores a newly committed order, returning its id.
    fn create(&self, order: Order) -> EngineResult<String>;

    /// Fetches an order by id.
    fn get(&self, order_id: &str) -> EngineResult<Order>;

    /// Replaces a stored order after a lifecycle transition.
    fn update(&self, order: &Order) -> EngineResult<()>;
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// In-memory order store.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: Mutex<HashMap<String, Order>>,
}

impl MemoryOrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryOrderStore::default()
    }

    /// Number of stored orders.
    pub fn count(&self) -> usize {
        self.orders.lock().expect("order store mutex poisoned").len()
    }

    /// Finds an order by its human-readable number.
    pub fn find_by_number(&self, order_number: &str) -> Option<Order> {
        let orders = self.orders.lock().expect("order store mutex poisoned");
        orders
            .values()
            .find(|o| o.order_number == order_number)
            .cloned()
    }
}

impl OrderStore for MemoryOrderStore {
    fn create(&self, order: Order) -> EngineResult<String> {
        let mut orders = self.orders.lock().expect("order store mutex poisoned");
        let id = order.id.clone();
        debug!(order_id = %id, order_number = %order.order_number, "Storing order");
        orders.insert(id.clone(), order);
        Ok(id)
    }

    fn get(&self, order_id: &str) -> EngineResult<Order> {
        let orders = self.orders.lock().expect("order store mutex poisoned");
        orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("Order", order_id))
    }

    fn update(&self, order: &Order) -> EngineResult<()> {
        let mut orders = self.orders.lock().expect("order store mutex poisoned");
        if !orders.contains_key(&order.id) {
            return Err(EngineError::not_found("Order", &order.id));
        }
        orders.insert(order.id.clone(), order.clone());
        Ok(())
    }
}
