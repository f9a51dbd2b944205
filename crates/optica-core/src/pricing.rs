//! # Pricing Engine
//!
//! Computes per-line and order-level monetary figures from quantities, unit
//! prices, discounts, and tax rates.
//!
//! ## Computation Order (per line)
//! ```text
//! line_subtotal            = unit_price × quantity
//! discount_amount          = min(fixed, subtotal)  |  subtotal × pct
//! subtotal_after_discount  = line_subtotal − discount_amount
//! line_tax                 = subtotal_after_discount × tax_rate
//! line_total               = subtotal_after_discount + line_tax
//! ```
//! Tax is always computed on the *discounted* subtotal.
//!
//! ## Guarantee
//! [`price_lines`] is deterministic and side-effect free; calling it twice
//! on the same cart yields identical output. The dashboard reprices on
//! every keystroke and relies on this.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::LineItem;

// =============================================================================
// Priced Line
// =============================================================================

/// The computed figures for one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricedLine {
    pub product_id: String,
    pub sku: String,
    pub quantity: i64,
    pub unit_price_cents: i64,

    /// unit price × quantity, before discount and tax.
    pub subtotal_cents: i64,

    /// Discount amount for this line (0 when none attached).
    pub discount_cents: i64,

    /// Subtotal after discount, before tax.
    pub subtotal_after_discount_cents: i64,

    /// Tax on the discounted subtotal.
    pub tax_cents: i64,

    /// Discounted subtotal plus tax.
    pub total_cents: i64,
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Order-level aggregates over a priced cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingResult {
    pub lines: Vec<PricedLine>,

    /// Σ line subtotals before discounts.
    pub subtotal_original_cents: i64,

    /// Σ line discount amounts.
    pub items_discount_total_cents: i64,

    /// Σ line subtotals after discounts.
    pub subtotal_after_discounts_cents: i64,

    /// Σ line taxes.
    pub tax_total_cents: i64,

    /// subtotal_after_discounts + tax_total.
    pub order_total_cents: i64,
}

impl PricingResult {
    /// Returns the order total as Money.
    #[inline]
    pub fn order_total(&self) -> Money {
        Money::from_cents(self.order_total_cents)
    }
}

// =============================================================================
// Pricing Function
// =============================================================================

/// Prices an ordered list of line items.
///
/// Pure function over its input: no catalog lookups, no mutation, no
/// hidden memoization.
///
/// ## Example
/// ```rust
/// use optica_core::pricing::price_lines;
/// # use optica_core::types::*;
/// # use chrono::Utc;
/// let line = LineItem {
///     product_id: "p-1".to_string(),
///     sku: "FR-100".to_string(),
///     name: "Frame".to_string(),
///     category: ProductCategory::Frames,
///     unit_price_cents: 10_000,
///     tax_rate_bps: 1300,
///     quantity: 2,
///     discount: None,
///     added_at: Utc::now(),
/// };
/// let result = price_lines(&[line]);
/// assert_eq!(result.order_total_cents, 22_600);
/// ```
pub fn price_lines(items: &[LineItem]) -> PricingResult {
    let mut lines = Vec::with_capacity(items.len());
    let mut subtotal_original = Money::zero();
    let mut items_discount_total = Money::zero();
    let mut subtotal_after_discounts = Money::zero();
    let mut tax_total = Money::zero();

    for item in items {
        let subtotal = item.subtotal();
        let discount = item.discount_amount();
        let after_discount = subtotal - discount;
        let tax = item.tax();
        let total = after_discount + tax;

        subtotal_original += subtotal;
        items_discount_total += discount;
        subtotal_after_discounts += after_discount;
        tax_total += tax;

        lines.push(PricedLine {
            product_id: item.product_id.clone(),
            sku: item.sku.clone(),
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            subtotal_cents: subtotal.cents(),
            discount_cents: discount.cents(),
            subtotal_after_discount_cents: after_discount.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
        });
    }

    PricingResult {
        lines,
        subtotal_original_cents: subtotal_original.cents(),
        items_discount_total_cents: items_discount_total.cents(),
        subtotal_after_discounts_cents: subtotal_after_discounts.cents(),
        tax_total_cents: tax_total.cents(),
        order_total_cents: (subtotal_after_discounts + tax_total).cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
