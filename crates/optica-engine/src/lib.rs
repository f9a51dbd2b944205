//! # optica-engine: Settlement Service Layer for Optica POS
//!
//! This crate orchestrates the pure logic in `optica-core` against the
//! collaborator interfaces the dashboard injects.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Optica Settlement Flow                         │
//! │                                                                     │
//! │  Dashboard action (checkout, add payment, return, void)             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 optica-engine (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌─────────────┐  │   │
//! │  │   │  Settlement   │   │ Collaborator  │   │    Stock    │  │   │
//! │  │   │   Service     │   │    Traits     │   │   Reconci-  │  │   │
//! │  │   │(settlement.rs)│   │               │   │   liation   │  │   │
//! │  │   │               │──►│ProductCatalog │◄──│  (stock.rs) │  │   │
//! │  │   │ commit, pay,  │   │OrderStore     │   │             │  │   │
//! │  │   │ return, void  │   │TagConfig      │   │             │  │   │
//! │  │   └───────┬───────┘   └───────────────┘   └─────────────┘  │   │
//! │  │           │                                                 │   │
//! │  └───────────┼─────────────────────────────────────────────────┘   │
//! │              ▼                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 optica-core (pure logic)                    │   │
//! │  │  pricing • discounts • tender ledger • order lifecycle      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`settlement`] - SettlementService: the caller-facing API
//! - [`catalog`] - ProductCatalog trait + in-memory implementation
//! - [`order_store`] - OrderStore trait + in-memory implementation
//! - [`tag_config`] - DiscountTagConfig trait + in-memory implementation
//! - [`stock`] - Stock reconciliation hook
//! - [`config`] - Per-process store configuration
//! - [`error`] - Service error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use optica_engine::{
//!     MemoryCatalog, MemoryOrderStore, MemoryTagConfig, SettlementService, StoreConfig,
//! };
//!
//! let service = SettlementService::new(
//!     Arc::new(MemoryCatalog::new()),
//!     Arc::new(MemoryOrderStore::new()),
//!     Arc::new(MemoryTagConfig::new()),
//!     StoreConfig::default(),
//! );
//! // service.build_line(..) → service.commit_checkout(..) → ...
//! ```
//!
//! Business rules themselves live in `optica-core`; nothing here re-derives
//! a total or a status.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod order_store;
pub mod settlement;
pub mod stock;
pub mod tag_config;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{EngineError, EngineResult};
pub use settlement::{OrderReceipt, SettlementService, TenderRequest};

// Collaborator re-exports for convenience
pub use catalog::{MemoryCatalog, ProductCatalog};
pub use order_store::{MemoryOrderStore, OrderStore};
pub use tag_config::{DiscountTagConfig, MemoryTagConfig};
