//! # optica-core: Pure Settlement Logic for Optica POS
//!
//! This crate is the heart of the Optica sale transaction and settlement
//! engine. It contains all business logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Optica Settlement Engine                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  Dashboard UI (external)                      │  │
//! │  │    Cart screen ──► Tender modal ──► Order history             │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                 optica-engine (service layer)                 │  │
//! │  │    commit_checkout, add_payment, process_return, void_order   │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                ★ optica-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌────────┐ ┌────────┐ ┌─────────┐  │  │
//! │  │   │  money  │ │ pricing │ │discount│ │ tender │ │  order  │  │  │
//! │  │   │  Money  │ │  totals │ │  tags  │ │ ledger │ │lifecycle│  │  │
//! │  │   └─────────┘ └─────────┘ └────────┘ └────────┘ └─────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, Order, PaymentEntry, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Cart pricing engine (per-line and order totals)
//! - [`discount`] - Discount resolver rules (tag offers, manual discounts)
//! - [`tender`] - Tender ledger (multi-tender accumulation, no overpayment)
//! - [`order`] - Order lifecycle state machine (payment/return/void)
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. The UI may reprice the same cart on every keystroke and
//!    must always see the same totals.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here.
//! 3. **Integer Money**: All monetary values are in minor units (i64).
//! 4. **Explicit Errors**: All errors are typed, never strings or panics.
//! 5. **All-or-nothing transitions**: A rejected operation leaves the order,
//!    ledger, and line items exactly as they were.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod tender;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use optica_core::Money` instead of
// `use optica_core::money::Money`.

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::Order;
pub use pricing::{price_lines, PricedLine, PricingResult};
pub use tender::TenderLedger;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tenant ID for v0.1 (single-tenant runtime with multi-tenant schema)
///
/// The clinic dashboard is multi-tenant at the schema level; this engine
/// currently runs one tenant per process and stamps everything with this id
/// until dynamic tenant resolution lands.
pub const DEFAULT_TENANT_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Maximum distinct lines allowed on a single order.
///
/// Prevents runaway carts and keeps transactions reviewable on the
/// settlement screen. Can be made configurable per-tenant later.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single line item.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
