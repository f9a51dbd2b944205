//! # Domain Types
//!
//! Core domain types used throughout the Optica settlement engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │   Product     │   │   LineItem    │   │ PaymentEntry  │         │
//! │  │ ───────────── │   │ ───────────── │   │ ───────────── │         │
//! │  │ id (UUID)     │──►│ snapshot of   │   │ method        │         │
//! │  │ price_cents   │   │ product at    │   │ amount_cents  │         │
//! │  │ offer_tag     │   │ sale time     │   │ reference     │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │   Discount    │   │  OrderStatus  │   │ DocumentType  │         │
//! │  │ kind + source │   │ 6-state machine│  │ ticket/invoice│         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for relations
//! - Business ID where applicable: (sku, order_number) - human-readable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01% = 1/10000. 1300 bps = 13% (the standard sales-tax
/// rate the clinic charges on frames, lenses, and accessories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// Catalog categories carried on every product.
///
/// `Service` is the non-stocked category: exam fees, fitting charges,
/// adjustments. Service lines never participate in stock checks or stock
/// reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Frames,
    Lenses,
    ContactLenses,
    Solutions,
    Accessories,
    Service,
}

impl ProductCategory {
    /// Whether this category tracks physical stock.
    #[inline]
    pub const fn is_stocked(&self) -> bool {
        !matches!(self, ProductCategory::Service)
    }
}

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Tenant this product belongs to.
    pub tenant_id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown on the cart screen and receipts.
    pub name: String,

    /// Catalog category; `Service` lines never touch stock.
    pub category: ProductCategory,

    /// Price in minor units.
    pub price_cents: i64,

    /// Tax rate in basis points (1300 = 13%).
    pub tax_rate_bps: u32,

    /// Name of the promotional discount tag attached to this product, if
    /// any. Resolved against the tag configuration when the product is
    /// added to a cart; an unknown name means "no offer".
    pub offer_tag: Option<String>,

    /// Current stock level (ignored for the `Service` category).
    pub stock_on_hand: i64,

    /// Whether product is active (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Checks if the requested quantity can be sold from current stock.
    ///
    /// Service products are never stock-limited.
    pub fn can_sell(&self, quantity: i64) -> bool {
        if !self.category.is_stocked() {
            return true;
        }
        self.stock_on_hand >= quantity
    }
}

// =============================================================================
// Discount Tags
// =============================================================================

/// A named promotional tag configuration.
///
/// Products reference tags by name; the resolved configuration is
/// snapshotted into a [`Discount`] the moment a tagged product is added to
/// a cart. Editing the tag afterwards does not touch existing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TagOffer {
    /// Tag name as referenced by `Product::offer_tag`.
    pub name: String,

    /// Discount percentage in basis points (1500 = 15%).
    pub percentage_bps: u32,

    /// CSS class the dashboard uses to badge tagged lines.
    pub display_class: String,
}

// =============================================================================
// Discount
// =============================================================================

/// How a discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountKind {
    /// Percentage of the line subtotal, in basis points.
    Percentage { bps: u32 },
    /// Fixed amount in minor units, capped at the line subtotal.
    Fixed { amount_cents: i64 },
}

/// Where a discount came from.
///
/// Tag-sourced discounts are attached automatically and cannot be edited or
/// removed through the manual-discount path; only removing the line clears
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSource {
    Manual,
    TagOffer,
}

/// A discount applied to a single line.
///
/// ## Invariant
/// `amount_applied_cents` is always recomputed from `kind` and the line
/// subtotal by the pricing engine - it is never trusted from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    pub kind: DiscountKind,
    pub source: DiscountSource,

    /// Human-readable reason shown on the receipt
    /// (e.g. `tag offer SUMMER15`, `manager adjustment`).
    pub reason: String,

    /// Last computed discount amount for the line this is attached to.
    pub amount_applied_cents: i64,
}

impl Discount {
    /// Creates a manual percentage discount.
    pub fn manual_percentage(bps: u32, reason: impl Into<String>) -> Self {
        Discount {
            kind: DiscountKind::Percentage { bps },
            source: DiscountSource::Manual,
            reason: reason.into(),
            amount_applied_cents: 0,
        }
    }

    /// Creates a manual fixed-amount discount.
    pub fn manual_fixed(amount: Money, reason: impl Into<String>) -> Self {
        Discount {
            kind: DiscountKind::Fixed {
                amount_cents: amount.cents(),
            },
            source: DiscountSource::Manual,
            reason: reason.into(),
            amount_applied_cents: 0,
        }
    }

    /// Snapshots a resolved tag offer into a discount.
    pub fn from_tag(offer: &TagOffer) -> Self {
        Discount {
            kind: DiscountKind::Percentage {
                bps: offer.percentage_bps,
            },
            source: DiscountSource::TagOffer,
            reason: format!("tag offer {}", offer.name),
            amount_applied_cents: 0,
        }
    }

    /// Whether this discount was attached by a promotional tag.
    #[inline]
    pub fn is_tag_sourced(&self) -> bool {
        self.source == DiscountSource::TagOffer
    }

    /// Computes the discount amount for a given line subtotal.
    ///
    /// Fixed discounts are capped at the subtotal so a line can never go
    /// negative.
    pub fn amount_for(&self, line_subtotal: Money) -> Money {
        match self.kind {
            DiscountKind::Percentage { bps } => line_subtotal.percentage(bps),
            DiscountKind::Fixed { amount_cents } => {
                Money::from_cents(amount_cents).min(line_subtotal)
            }
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line item on an order.
///
/// Uses the snapshot pattern: product identity and financial figures are
/// frozen at the moment the product is added to the cart. An order's
/// historical totals must never change because a product's price changed
/// later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product ID (UUID) for catalog relations.
    pub product_id: String,

    /// SKU at time of sale (frozen).
    pub sku: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Category at time of sale; drives stock reconciliation.
    pub category: ProductCategory,

    /// Unit price in minor units at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Tax rate in basis points at time of sale (frozen).
    pub tax_rate_bps: u32,

    /// Quantity sold (integer, >= 1).
    pub quantity: i64,

    /// Optional discount (manual or tag-sourced).
    pub discount: Option<Discount>,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item from a product, freezing its current figures.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            category: product.category,
            unit_price_cents: product.price_cents,
            tax_rate_bps: product.tax_rate_bps,
            quantity,
            discount: None,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line subtotal before discount and tax (unit price × quantity).
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Discount amount for this line (zero when no discount attached).
    pub fn discount_amount(&self) -> Money {
        match &self.discount {
            Some(d) => d.amount_for(self.subtotal()),
            None => Money::zero(),
        }
    }

    /// Line subtotal after discount, before tax.
    #[inline]
    pub fn subtotal_after_discount(&self) -> Money {
        self.subtotal() - self.discount_amount()
    }

    /// Tax for this line, computed on the discounted subtotal.
    #[inline]
    pub fn tax(&self) -> Money {
        self.subtotal_after_discount()
            .calculate_tax(TaxRate::from_bps(self.tax_rate_bps))
    }

    /// Line total: discounted subtotal plus tax.
    #[inline]
    pub fn total(&self) -> Money {
        self.subtotal_after_discount() + self.tax()
    }
}

// =============================================================================
// Payment Method & Entry
// =============================================================================

/// How a tender was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Card payment on the clinic's terminal.
    Card,
    /// Mobile wallet transfer.
    MobileTransfer,
    /// Direct bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Non-cash methods must carry an external reference
    /// (authorization code, transfer id).
    #[inline]
    pub const fn requires_reference(&self) -> bool {
        !matches!(self, PaymentMethod::Cash)
    }
}

/// A single tender applied toward an order's balance.
///
/// An order can accumulate multiple entries for split-tender settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentEntry {
    pub id: String,
    pub method: PaymentMethod,

    /// Amount paid in minor units (always > 0).
    pub amount_cents: i64,

    /// External reference; required for every method except cash.
    pub reference: Option<String>,

    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl PaymentEntry {
    /// Returns the payment amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Document Type & Customer
// =============================================================================

/// The kind of sale record being produced.
///
/// Affects whether an identified customer is mandatory and whether the
/// order may be committed without tenders; it never affects pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Plain sales ticket.
    Ticket,
    /// Tax invoice - requires an identified customer.
    Invoice,
    /// Priced quote saved without payment (`pending_payment`).
    Proforma,
    /// Internal receipt for clinic bookkeeping.
    InternalReceipt,
}

impl DocumentType {
    /// Whether this document requires an identified (non-walk-in) customer.
    #[inline]
    pub const fn requires_customer(&self) -> bool {
        matches!(self, DocumentType::Invoice)
    }

    /// Whether this document may be committed with an empty tender ledger.
    #[inline]
    pub const fn allows_unpaid_commit(&self) -> bool {
        matches!(self, DocumentType::Proforma)
    }
}

/// Reference to an identified customer.
///
/// `Option<CustomerRef>` on an order, where `None` is the generic walk-in
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerRef {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// ## State Machine
/// ```text
/// pending_payment ──► partially_paid ──► completed ──► partially_returned
///        (derived from tendered vs total)     │               │    │
///                                             │               │    ▼
///                                             ├───────────────┼─► fully_returned
///                                             ▼               ▼
///                                           voided ◄──────────┘   (terminal)
/// ```
/// Payment-driven states are always derived, never hand-set; return and
/// void are explicit one-way actions layered on top. Nothing leaves
/// `voided`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Committed with no tenders (proforma / quote).
    PendingPayment,
    /// Tenders cover part of the total.
    PartiallyPaid,
    /// Fully settled.
    Completed,
    /// Some, but not all, units returned.
    PartiallyReturned,
    /// Every unit returned.
    FullyReturned,
    /// Billing correction; terminal.
    Voided,
}

impl OrderStatus {
    /// Derives the settlement status from tendered-vs-total.
    ///
    /// This is the only way payment-driven status is ever produced.
    pub fn from_settlement(total: Money, paid: Money) -> OrderStatus {
        if paid >= total {
            OrderStatus::Completed
        } else if paid.is_positive() {
            OrderStatus::PartiallyPaid
        } else {
            OrderStatus::PendingPayment
        }
    }

    /// Whether additional payments may be merged in.
    #[inline]
    pub const fn is_payable(&self) -> bool {
        matches!(self, OrderStatus::PartiallyPaid)
    }

    /// Whether goods can be returned from this status.
    #[inline]
    pub const fn can_return(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::PartiallyReturned)
    }

    /// Whether the order can be voided from this status.
    #[inline]
    pub const fn can_void(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::PartiallyReturned)
    }
}

// =============================================================================
// Returns
// =============================================================================

/// A caller's request to return units of one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReturnLine {
    pub product_id: String,
    pub quantity: i64,
}

/// A recorded return against one line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReturnRecord {
    pub product_id: String,
    pub quantity: i64,

    /// Reason given for the return action this record belongs to.
    pub reason: Option<String>,

    #[ts(as = "String")]
    pub returned_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
