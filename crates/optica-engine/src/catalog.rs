//! # Product Catalog
//!
//! The catalog collaborator interface and its in-memory implementation.
//!
//! The dashboard's product CRUD lives elsewhere; the settlement engine
//! only ever reads products and adjusts stock. The catalog is an injected
//! repository rather than a process-global store, so the engine carries no
//! implicit global state and tests run against plain in-memory fakes.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use optica_core::Product;

// =============================================================================
// Trait
// =============================================================================

/// Read and stock-adjust access to the product catalog.
pub trait ProductCatalog: Send + Sync {
    /// Fetches a product by id.
    fn get(&self, product_id: &str) -> EngineResult<Product>;

    /// Adjusts stock by a relative delta (negative for sales, positive
    /// for returns/restocking).
    ///
    /// Implementations must apply the delta against the *stored* value
    /// atomically - never read-modify-write across calls - so two
    /// checkouts touching the same product cannot lose an update.
    fn adjust_stock(&self, product_id: &str, delta: i64) -> EngineResult<()>;
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// In-memory catalog used by tests and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: Mutex<HashMap<String, Product>>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        MemoryCatalog::default()
    }

    /// Creates a catalog pre-seeded with products.
    pub fn with_products(products: Vec<Product>) -> Self {
        let catalog = MemoryCatalog::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Inserts or replaces a product.
    pub fn insert(&self, product: Product) {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        products.insert(product.id.clone(), product);
    }

    /// Finds a product by SKU.
    pub fn find_by_sku(&self, sku: &str) -> Option<Product> {
        let products = self.products.lock().expect("catalog mutex poisoned");
        products.values().find(|p| p.sku == sku).cloned()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.lock().expect("catalog mutex poisoned").len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductCatalog for MemoryCatalog {
    fn get(&self, product_id: &str) -> EngineResult<Product> {
        let products = self.products.lock().expect("catalog mutex poisoned");
        products
            .get(product_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("Product", product_id))
    }

    fn adjust_stock(&self, product_id: &str, delta: i64) -> EngineResult<()> {
        // Read and write under one lock acquisition: the compare-and-adjust
        // is atomic with respect to other callers.
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        let product = products
            .get_mut(product_id)
            .ok_or_else(|| EngineError::not_found("Product", product_id))?;

        product.stock_on_hand += delta;
        product.updated_at = chrono::Utc::now();

        debug!(
            product_id = %product_id,
            delta = %delta,
            stock = %product.stock_on_hand,
            "Stock adjusted"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
