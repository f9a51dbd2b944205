//! # Stock Reconciliation Hook
//!
//! Keeps product stock counts consistent with order lifecycle events.
//!
//! ## Event → Stock Movement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Checkout commit (completed / partially_paid)                       │
//! │      └── decrement each stocked line by its quantity                │
//! │                                                                     │
//! │  Checkout commit (pending_payment proforma)                         │
//! │      └── no movement - nothing was sold yet                         │
//! │                                                                     │
//! │  Return                                                             │
//! │      └── increment each stocked returned line by its quantity       │
//! │                                                                     │
//! │  Void                                                               │
//! │      └── NO automatic restock: voiding is a billing correction,     │
//! │          not a goods movement. Restocking after a void goes         │
//! │          through an explicit Return first.                          │
//! │                                                                     │
//! │  Service-category lines never move stock in any direction.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//! Each function verifies everything it needs before applying the first
//! adjustment, so a failure leaves stock untouched. The settlement service
//! invokes each hook exactly once per triggering event.

use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::error::EngineResult;
use optica_core::{CoreError, LineItem, ReturnLine};

/// Verifies commit-time stock sufficiency for every stocked line.
///
/// Called immediately before the decrement so the cart-add check cannot
/// have gone stale between screens.
pub fn verify_availability(catalog: &dyn ProductCatalog, items: &[LineItem]) -> EngineResult<()> {
    for item in items {
        if !item.category.is_stocked() {
            continue;
        }

        let product = catalog.get(&item.product_id)?;
        if !product.can_sell(item.quantity) {
            return Err(CoreError::InsufficientStock {
                sku: product.sku,
                available: product.stock_on_hand,
                requested: item.quantity,
            }
            .into());
        }
    }

    Ok(())
}

/// Decrements stock for every stocked line of a committed sale.
pub fn consume_for_sale(catalog: &dyn ProductCatalog, items: &[LineItem]) -> EngineResult<()> {
    for item in items {
        if !item.category.is_stocked() {
            continue;
        }
        catalog.adjust_stock(&item.product_id, -item.quantity)?;
    }

    debug!(lines = items.len(), "Sale stock consumed");
    Ok(())
}

/// Increments stock for returned units.
///
/// `order_items` supplies the category snapshot for each returned line;
/// service lines are skipped. All catalog entries are verified before the
/// first increment is applied.
pub fn restock_returns(
    catalog: &dyn ProductCatalog,
    order_items: &[LineItem],
    returned: &[ReturnLine],
) -> EngineResult<()> {
    let stocked = |product_id: &str| {
        order_items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.category.is_stocked())
            .unwrap_or(false)
    };

    // Verification pass: every stocked product must still exist.
    for line in returned {
        if stocked(&line.product_id) {
            catalog.get(&line.product_id)?;
        }
    }

    for line in returned {
        if stocked(&line.product_id) {
            catalog.adjust_stock(&line.product_id, line.quantity)?;
        }
    }

    debug!(lines = returned.len(), "Return restocked");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
