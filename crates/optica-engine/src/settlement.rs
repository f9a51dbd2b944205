//! # Settlement Service
//!
//! The caller-facing API of the engine. The dashboard (or a CLI) invokes
//! these operations; everything else in the workspace exists to serve
//! them.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  build_line ──► price_cart ──► commit_checkout                      │
//! │  (tag offers)   (pure)          │                                   │
//! │                                 ├── Order created (only here)       │
//! │                                 └── stock consumed if paid          │
//! │                                                                     │
//! │  Later, against the stored order:                                   │
//! │    add_payment ──► status re-derived                                │
//! │    process_return ──► status re-derived, stock restocked            │
//! │    void_order ──► terminal, stock untouched                         │
//! │    receipt ──► display projection                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//! Operations on a single order are sequential, non-overlapping steps
//! triggered by user action; nothing here suspends or retries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::ProductCatalog;
use crate::config::StoreConfig;
use crate::error::EngineResult;
use crate::order_store::OrderStore;
use crate::stock;
use crate::tag_config::DiscountTagConfig;
use optica_core::{
    discount, price_lines, CoreError, CustomerRef, DocumentType, LineItem, Money, Order,
    OrderStatus, PaymentEntry, PaymentMethod, PricingResult, ReturnLine, TenderLedger,
};

// =============================================================================
// Request DTOs
// =============================================================================

/// A tender as submitted from the payment modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderRequest {
    pub method: PaymentMethod,
    pub amount_cents: i64,
    pub reference: Option<String>,
}

// =============================================================================
// Receipt Projection
// =============================================================================

/// Display projection of a stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    pub order_number: String,
    pub store_name: String,
    pub document_type: DocumentType,
    pub status: OrderStatus,
    pub timestamp: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub payments: Vec<ReceiptTender>,
    pub amount_paid_cents: i64,
    pub balance_due_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub discount_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTender {
    pub method: PaymentMethod,
    pub amount_cents: i64,
    pub reference: Option<String>,
}

impl OrderReceipt {
    fn from_order(order: &Order, store_name: &str) -> Self {
        OrderReceipt {
            order_id: order.id.clone(),
            order_number: order.order_number.clone(),
            store_name: store_name.to_string(),
            document_type: order.document_type,
            status: order.status,
            timestamp: order.created_at.to_rfc3339(),
            lines: order
                .items
                .iter()
                .map(|item| ReceiptLine {
                    sku: item.sku.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    discount_cents: item.discount_amount().cents(),
                    line_total_cents: item.total().cents(),
                })
                .collect(),
            subtotal_cents: order.subtotal_original_cents,
            discount_cents: order.items_discount_total_cents,
            tax_cents: order.tax_total_cents,
            total_cents: order.order_total_cents,
            payments: order
                .payments
                .iter()
                .map(|p| ReceiptTender {
                    method: p.method,
                    amount_cents: p.amount_cents,
                    reference: p.reference.clone(),
                })
                .collect(),
            amount_paid_cents: order.amount_paid().cents(),
            balance_due_cents: order.balance_due().cents(),
        }
    }
}

// =============================================================================
// Settlement Service
// =============================================================================

/// Orchestrates checkout, settlement, returns, and voids over the
/// injected collaborators.
///
/// Constructed once per process; holds no order state of its own. The
/// single shared piece of state is the order-number sequence.
pub struct SettlementService {
    catalog: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderStore>,
    tags: Arc<dyn DiscountTagConfig>,
    config: StoreConfig,
    order_seq: AtomicU64,
}

impl SettlementService {
    /// Creates a service over the given collaborators.
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        orders: Arc<dyn OrderStore>,
        tags: Arc<dyn DiscountTagConfig>,
        config: StoreConfig,
    ) -> Self {
        SettlementService {
            catalog,
            orders,
            tags,
            config,
            order_seq: AtomicU64::new(0),
        }
    }

    /// Generates an order number in format `YYYYMMDD-DD-NNNN`.
    ///
    /// DD is the device code, NNNN an in-process sequence.
    // TODO: persist a per-day counter so numbering survives restarts
    fn next_order_number(&self) -> String {
        let seq = self.order_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!(
            "{}-{}-{:04}",
            Utc::now().format("%Y%m%d"),
            self.config.device_code,
            seq % 10_000
        )
    }

    // -------------------------------------------------------------------------
    // Cart Building
    // -------------------------------------------------------------------------

    /// Snapshots a catalog product into a cart line.
    ///
    /// Checks the product is active and (for stocked categories) that the
    /// requested quantity is available right now; attaches the automatic
    /// tag discount when the product's tag resolves. Prices, tax rate, and
    /// the offer are frozen into the line - later catalog edits never
    /// touch it.
    pub fn build_line(&self, product_id: &str, quantity: i64) -> EngineResult<LineItem> {
        debug!(product_id = %product_id, quantity = %quantity, "build_line");

        optica_core::validation::validate_quantity(quantity)?;

        let product = self.catalog.get(product_id)?;

        if !product.is_active {
            return Err(CoreError::Validation(
                optica_core::ValidationError::Unavailable {
                    field: "product".to_string(),
                    value: product.sku.clone(),
                },
            )
            .into());
        }

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                sku: product.sku,
                available: product.stock_on_hand,
                requested: quantity,
            }
            .into());
        }

        let mut line = LineItem::from_product(&product, quantity);

        let resolved = product
            .offer_tag
            .as_deref()
            .and_then(|tag| self.tags.resolve(tag));
        line.discount = discount::resolve_tag_discount(&product, resolved);

        Ok(line)
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Prices a cart. Pure passthrough to the core pricing engine - safe
    /// to call on every keystroke.
    pub fn price_cart(&self, items: &[LineItem]) -> PricingResult {
        price_lines(items)
    }

    // -------------------------------------------------------------------------
    // Checkout Commit
    // -------------------------------------------------------------------------

    /// Commits a cart and tender list as a new order.
    ///
    /// The only entry point that creates an order. Tenders are validated
    /// against the priced total (no overpayment, references present),
    /// stock sufficiency is re-verified, and stock is consumed when the
    /// derived status is `completed` or `partially_paid` (a proforma moves
    /// no goods).
    pub fn commit_checkout(
        &self,
        items: Vec<LineItem>,
        tenders: &[TenderRequest],
        document_type: DocumentType,
        customer: Option<CustomerRef>,
    ) -> EngineResult<Order> {
        debug!(
            lines = items.len(),
            tenders = tenders.len(),
            document_type = ?document_type,
            "commit_checkout"
        );

        let pricing = price_lines(&items);

        let mut ledger = TenderLedger::new(pricing.order_total());
        for tender in tenders {
            ledger.add_tender(
                tender.method,
                Money::from_cents(tender.amount_cents),
                tender.reference.clone(),
            )?;
        }

        stock::verify_availability(self.catalog.as_ref(), &items)?;

        let order = Order::commit(
            Uuid::new_v4().to_string(),
            self.next_order_number(),
            self.config.tenant_id.clone(),
            document_type,
            customer,
            items,
            ledger.into_entries(),
        )?;

        self.orders.create(order.clone())?;

        if matches!(
            order.status,
            OrderStatus::Completed | OrderStatus::PartiallyPaid
        ) {
            stock::consume_for_sale(self.catalog.as_ref(), &order.items)?;
        }

        info!(
            order_id = %order.id,
            order_number = %order.order_number,
            total = %order.order_total(),
            status = ?order.status,
            "Order committed"
        );
        Ok(order)
    }

    // -------------------------------------------------------------------------
    // Add Payment
    // -------------------------------------------------------------------------

    /// Merges additional tenders into a partially paid order.
    pub fn add_payment(&self, order_id: &str, tenders: &[TenderRequest]) -> EngineResult<Order> {
        debug!(order_id = %order_id, tenders = tenders.len(), "add_payment");

        let mut order = self.orders.get(order_id)?;

        let entries: Vec<PaymentEntry> = tenders
            .iter()
            .map(|t| PaymentEntry {
                id: Uuid::new_v4().to_string(),
                method: t.method,
                amount_cents: t.amount_cents,
                reference: t.reference.clone(),
                recorded_at: Utc::now(),
            })
            .collect();

        order.add_payments(entries)?;
        self.orders.update(&order)?;

        info!(
            order_id = %order.id,
            paid = %order.amount_paid(),
            balance = %order.balance_due(),
            status = ?order.status,
            "Payment added"
        );
        Ok(order)
    }

    // -------------------------------------------------------------------------
    // Return
    // -------------------------------------------------------------------------

    /// Processes a return of units against a stored order and restocks
    /// the returned goods (service lines excepted).
    pub fn process_return(
        &self,
        order_id: &str,
        lines: &[ReturnLine],
        reason: Option<&str>,
    ) -> EngineResult<Order> {
        debug!(order_id = %order_id, lines = lines.len(), "process_return");

        let mut order = self.orders.get(order_id)?;
        order.apply_return(lines, reason)?;

        // Restock before persisting: a catalog failure must leave the
        // stored order unchanged.
        stock::restock_returns(self.catalog.as_ref(), &order.items, lines)?;
        self.orders.update(&order)?;

        info!(
            order_id = %order.id,
            returned = order.total_returned_quantity(),
            status = ?order.status,
            "Return processed"
        );
        Ok(order)
    }

    // -------------------------------------------------------------------------
    // Void
    // -------------------------------------------------------------------------

    /// Voids a stored order as a billing correction.
    ///
    /// Stock is deliberately untouched: restocking after a void requires
    /// an explicit return first.
    pub fn void_order(&self, order_id: &str, reason: &str) -> EngineResult<Order> {
        debug!(order_id = %order_id, "void_order");

        let mut order = self.orders.get(order_id)?;
        order.void(reason)?;
        self.orders.update(&order)?;

        info!(order_id = %order.id, reason = %reason, "Order voided");
        Ok(order)
    }

    // -------------------------------------------------------------------------
    // Receipt
    // -------------------------------------------------------------------------

    /// Builds the display projection of a stored order.
    pub fn receipt(&self, order_id: &str) -> EngineResult<OrderReceipt> {
        let order = self.orders.get(order_id)?;
        Ok(OrderReceipt::from_order(&order, &self.config.store_name))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::error::EngineError;
    use crate::order_store::MemoryOrderStore;
    use crate::tag_config::MemoryTagConfig;
    use optica_core::{Product, ProductCategory, TagOffer};

    fn product(
        id: &str,
        category: ProductCategory,
        price_cents: i64,
        stock: i64,
        offer_tag: Option<&str>,
    ) -> Product {
        Product {
            id: id.to_string(),
            tenant_id: optica_core::DEFAULT_TENANT_ID.to_string(),
            sku: format!("SKU-{}", id),
            name: format!("Product {}", id),
            category,
            price_cents,
            tax_rate_bps: 1300,
            offer_tag: offer_tag.map(str::to_string),
            stock_on_hand: stock,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct Fixture {
        service: SettlementService,
        catalog: Arc<MemoryCatalog>,
        orders: Arc<MemoryOrderStore>,
    }

    /// Catalog: frames (10000, stock 10), exam service (5000),
    /// tagged solution (4500, stock 20, SUMMER15 = 15%).
    fn fixture() -> Fixture {
        let catalog = Arc::new(MemoryCatalog::with_products(vec![
            product("frames", ProductCategory::Frames, 10_000, 10, None),
            product("exam", ProductCategory::Service, 5000, 0, None),
            product(
                "solution",
                ProductCategory::Solutions,
                4500,
                20,
                Some("SUMMER15"),
            ),
            product("ghost-tag", ProductCategory::Accessories, 2000, 5, Some("GONE")),
        ]));

        let tags = Arc::new(MemoryTagConfig::new());
        tags.insert(TagOffer {
            name: "SUMMER15".to_string(),
            percentage_bps: 1500,
            display_class: "badge-offer".to_string(),
        });

        let orders = Arc::new(MemoryOrderStore::new());

        let service = SettlementService::new(
            catalog.clone(),
            orders.clone(),
            tags,
            StoreConfig::default(),
        );

        Fixture {
            service,
            catalog,
            orders,
        }
    }

    fn cash(amount_cents: i64) -> TenderRequest {
        TenderRequest {
            method: PaymentMethod::Cash,
            amount_cents,
            reference: None,
        }
    }

    fn card(amount_cents: i64, reference: &str) -> TenderRequest {
        TenderRequest {
            method: PaymentMethod::Card,
            amount_cents,
            reference: Some(reference.to_string()),
        }
    }

    #[test]
    fn test_build_line_attaches_tag_discount() {
        let f = fixture();
        let line = f.service.build_line("solution", 2).unwrap();

        let d = line.discount.as_ref().unwrap();
        assert!(d.is_tag_sourced());
        assert_eq!(d.reason, "tag offer SUMMER15");

        // 4500 × 2 = 9000, 15% off = 1350, after = 7650, tax 13% = 995 (994.5 up)
        let pricing = f.service.price_cart(&[line]);
        assert_eq!(pricing.items_discount_total_cents, 1350);
        assert_eq!(pricing.order_total_cents, 7650 + 995);
    }

    #[test]
    fn test_build_line_unknown_tag_is_silent() {
        let f = fixture();
        let line = f.service.build_line("ghost-tag", 1).unwrap();
        assert!(line.discount.is_none());
    }

    #[test]
    fn test_build_line_rejects_insufficient_stock() {
        let f = fixture();
        let err = f.service.build_line("frames", 11).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_build_line_service_quantity_unlimited() {
        let f = fixture();
        let line = f.service.build_line("exam", 3).unwrap();
        assert_eq!(line.category, ProductCategory::Service);
    }

    #[test]
    fn test_commit_consumes_stock_for_stocked_lines_only() {
        let f = fixture();
        let items = vec![
            f.service.build_line("frames", 2).unwrap(),
            f.service.build_line("exam", 1).unwrap(),
        ];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 8);
        assert_eq!(f.catalog.get("exam").unwrap().stock_on_hand, 0);
        assert_eq!(f.orders.count(), 1);
    }

    #[test]
    fn test_commit_partial_payment_consumes_stock() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];

        let order = f
            .service
            .commit_checkout(items, &[cash(15_000)], DocumentType::Ticket, None)
            .unwrap();

        assert_eq!(order.status, OrderStatus::PartiallyPaid);
        assert_eq!(order.balance_due().cents(), 7600);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 8);
    }

    #[test]
    fn test_commit_proforma_moves_no_stock() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];

        let order = f
            .service
            .commit_checkout(items, &[], DocumentType::Proforma, None)
            .unwrap();

        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 10);
    }

    #[test]
    fn test_commit_overpayment_rejected_before_any_mutation() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];

        // Total is 22600; 25000 cash must be rejected outright
        let err = f
            .service
            .commit_checkout(items, &[cash(25_000)], DocumentType::Ticket, None)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::OverpaymentRejected { .. })
        ));

        assert_eq!(f.orders.count(), 0);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 10);
    }

    #[test]
    fn test_commit_stale_stock_rejected_without_order() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 8).unwrap()];

        // Stock drains between cart-add and commit
        f.catalog.adjust_stock("frames", -5).unwrap();

        let err = f
            .service
            .commit_checkout(items, &[cash(90_400)], DocumentType::Ticket, None)
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::InsufficientStock { .. })
        ));
        assert_eq!(f.orders.count(), 0);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 5);
    }

    #[test]
    fn test_split_tender_settlement_flow() {
        // Scenario: 20340 total, 15000 cash then 5340 card
        let f = fixture();
        let mut items = vec![f.service.build_line("frames", 2).unwrap()];
        optica_core::discount::apply_manual_discount(
            &mut items[0],
            optica_core::Discount::manual_percentage(1000, "loyalty"),
        )
        .unwrap();

        let pricing = f.service.price_cart(&items);
        assert_eq!(pricing.order_total_cents, 20_340);

        let order = f
            .service
            .commit_checkout(items, &[cash(15_000)], DocumentType::Ticket, None)
            .unwrap();
        assert_eq!(order.status, OrderStatus::PartiallyPaid);
        assert_eq!(order.balance_due().cents(), 5340);

        let order = f
            .service
            .add_payment(&order.id, &[card(5340, "REF1")])
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.balance_due().cents(), 0);

        // The stored copy reflects the transition
        let stored = f.orders.get(&order.id).unwrap();
        assert_eq!(stored.status, OrderStatus::Completed);
        assert_eq!(stored.payments.len(), 2);
    }

    #[test]
    fn test_add_payment_unknown_order() {
        let f = fixture();
        let err = f.service.add_payment("nope", &[cash(100)]).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn test_full_return_restocks() {
        // Scenario: completed order with qty 3; full return restocks by 3
        let f = fixture();
        let items = vec![f.service.build_line("frames", 3).unwrap()];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 7);

        let order = f
            .service
            .process_return(
                &order.id,
                &[ReturnLine {
                    product_id: "frames".to_string(),
                    quantity: 3,
                }],
                Some("wrong prescription"),
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::FullyReturned);
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 10);
    }

    #[test]
    fn test_return_of_service_line_moves_no_stock() {
        let f = fixture();
        let items = vec![
            f.service.build_line("frames", 1).unwrap(),
            f.service.build_line("exam", 1).unwrap(),
        ];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        let order = f
            .service
            .process_return(
                &order.id,
                &[ReturnLine {
                    product_id: "exam".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::PartiallyReturned);
        assert_eq!(f.catalog.get("exam").unwrap().stock_on_hand, 0);
    }

    #[test]
    fn test_excess_return_leaves_everything_untouched() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        let err = f
            .service
            .process_return(
                &order.id,
                &[ReturnLine {
                    product_id: "frames".to_string(),
                    quantity: 3,
                }],
                None,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::ReturnExceedsReturnable { .. })
        ));

        let stored = f.orders.get(&order.id).unwrap();
        assert_eq!(stored.status, OrderStatus::Completed);
        assert!(stored.returns.is_empty());
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 8);
    }

    #[test]
    fn test_void_keeps_stock_where_it_is() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        let order = f.service.void_order(&order.id, "billing error").unwrap();
        assert_eq!(order.status, OrderStatus::Voided);
        assert_eq!(order.void_reason.as_deref(), Some("billing error"));

        // No automatic restock on void
        assert_eq!(f.catalog.get("frames").unwrap().stock_on_hand, 8);
    }

    #[test]
    fn test_void_scenario_sequence() {
        // Empty reason rejected, void from partially_returned succeeds,
        // second void is an invariant violation
        let f = fixture();
        let items = vec![f.service.build_line("frames", 2).unwrap()];
        let pricing = f.service.price_cart(&items);
        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        let err = f.service.void_order(&order.id, "").unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::Validation(_))
        ));

        f.service
            .process_return(
                &order.id,
                &[ReturnLine {
                    product_id: "frames".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap();

        let order = f
            .service
            .void_order(&order.id, "customer cancelled")
            .unwrap();
        assert_eq!(order.status, OrderStatus::Voided);

        let err = f
            .service
            .void_order(&order.id, "customer cancelled")
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_invoice_requires_identified_customer() {
        let f = fixture();
        let items = vec![f.service.build_line("frames", 1).unwrap()];
        let pricing = f.service.price_cart(&items);

        let err = f
            .service
            .commit_checkout(
                items.clone(),
                &[cash(pricing.order_total_cents)],
                DocumentType::Invoice,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::Validation(_))));
        assert_eq!(f.orders.count(), 0);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Invoice,
                Some(CustomerRef {
                    id: "c-1".to_string(),
                    name: "A. Patient".to_string(),
                }),
            )
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_receipt_projection_matches_order() {
        let f = fixture();
        let items = vec![
            f.service.build_line("solution", 2).unwrap(),
            f.service.build_line("exam", 1).unwrap(),
        ];
        let pricing = f.service.price_cart(&items);

        let order = f
            .service
            .commit_checkout(
                items,
                &[cash(pricing.order_total_cents)],
                DocumentType::Ticket,
                None,
            )
            .unwrap();

        let receipt = f.service.receipt(&order.id).unwrap();
        assert_eq!(receipt.order_number, order.order_number);
        assert_eq!(receipt.store_name, "Optica");
        assert_eq!(receipt.total_cents, order.order_total_cents);
        assert_eq!(receipt.amount_paid_cents, order.order_total_cents);
        assert_eq!(receipt.balance_due_cents, 0);
        assert_eq!(receipt.lines.len(), 2);

        let line_sum: i64 = receipt.lines.iter().map(|l| l.line_total_cents).sum();
        assert_eq!(line_sum, receipt.total_cents);
    }

    #[test]
    fn test_order_numbers_are_sequential() {
        let f = fixture();
        let first = f.service.next_order_number();
        let second = f.service.next_order_number();

        assert!(first.ends_with("-0001"));
        assert!(second.ends_with("-0002"));
        assert!(first.contains("-01-"));
    }
}
