//! # Discount Tag Configuration
//!
//! Lookup interface for named promotional tags. Products reference tags by
//! name; resolution happens once, when a product enters the cart, and the
//! resolved offer is snapshotted into the line's discount.
//!
//! A tag that cannot be resolved (deleted after the product was created)
//! is simply "no offer" - resolution never fails.

use std::collections::HashMap;
use std::sync::Mutex;

use optica_core::TagOffer;

// =============================================================================
// Trait
// =============================================================================

/// Resolves tag names to their current configuration.
pub trait DiscountTagConfig: Send + Sync {
    /// Looks up a tag by name; `None` when the tag is unknown.
    fn resolve(&self, tag_name: &str) -> Option<TagOffer>;
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// In-memory tag configuration.
#[derive(Debug, Default)]
pub struct MemoryTagConfig {
    tags: Mutex<HashMap<String, TagOffer>>,
}

impl MemoryTagConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        MemoryTagConfig::default()
    }

    /// Inserts or replaces a tag.
    pub fn insert(&self, offer: TagOffer) {
        let mut tags = self.tags.lock().expect("tag config mutex poisoned");
        tags.insert(offer.name.clone(), offer);
    }

    /// Removes a tag, simulating configuration edits after products were
    /// created against it.
    pub fn remove(&self, tag_name: &str) -> Option<TagOffer> {
        let mut tags = self.tags.lock().expect("tag config mutex poisoned");
        tags.remove(tag_name)
    }
}

impl DiscountTagConfig for MemoryTagConfig {
    fn resolve(&self, tag_name: &str) -> Option<TagOffer> {
        let tags = self.tags.lock().expect("tag config mutex poisoned");
        tags.get(tag_name).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
