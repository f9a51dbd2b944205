//! # Order Lifecycle
//!
//! The order aggregate and its state machine.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  1. COMMIT (the only entry point that creates an order)             │
//! │     └── Order::commit() derives the initial status from the         │
//! │         tender ledger: covered → completed, partial →               │
//! │         partially_paid, none (proforma) → pending_payment           │
//! │                                                                     │
//! │  2. ADD PAYMENT (only from partially_paid)                          │
//! │     └── add_payments() merges entries, re-derives status            │
//! │                                                                     │
//! │  3. RETURN (only from completed / partially_returned)               │
//! │     └── apply_return() checks remaining returnable per line,        │
//! │         derives partially_returned / fully_returned                 │
//! │                                                                     │
//! │  4. VOID (only from completed / partially_returned)                 │
//! │     └── void() requires a reason; terminal, nothing leaves voided   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//! Payment-driven status is recomputed, never hand-set. Every transition
//! validates completely before mutating anything; a rejected call leaves
//! the order exactly as it was.
//!
//! An order is immutable after commit except for: status, payments,
//! returns, and void metadata. Line items are snapshots - a later product
//! price change never alters a committed order's totals. Orders are never
//! deleted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::price_lines;
use crate::tender::TenderLedger;
use crate::types::{
    CustomerRef, DocumentType, LineItem, OrderStatus, PaymentEntry, ReturnLine, ReturnRecord,
};
use crate::validation::{validate_customer, validate_line_count, validate_quantity, validate_reason};

// =============================================================================
// Order
// =============================================================================

/// A committed sale transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,
    pub tenant_id: String,

    /// Human-readable order number (`YYYYMMDD-<device>-NNNN`).
    pub order_number: String,

    pub document_type: DocumentType,

    /// `None` is the generic walk-in customer.
    pub customer: Option<CustomerRef>,

    /// Line items snapshotted at sale time.
    pub items: Vec<LineItem>,

    /// Σ line subtotals before discounts.
    pub subtotal_original_cents: i64,
    /// Σ line discount amounts.
    pub items_discount_total_cents: i64,
    /// Σ line subtotals after discounts.
    pub subtotal_after_discounts_cents: i64,
    /// Σ line taxes.
    pub tax_total_cents: i64,
    /// Grand total: discounted subtotal plus tax.
    pub order_total_cents: i64,

    /// Tenders recorded against the total, in order of receipt.
    pub payments: Vec<PaymentEntry>,

    /// Accumulated return records.
    pub returns: Vec<ReturnRecord>,

    pub status: OrderStatus,

    /// Reason recorded when the order was voided.
    pub void_reason: Option<String>,
    #[ts(as = "Option<String>")]
    pub voided_at: Option<DateTime<Utc>>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    // -------------------------------------------------------------------------
    // Checkout Commit
    // -------------------------------------------------------------------------

    /// Creates an order from a finished cart and tender list.
    ///
    /// This is the only way an order comes into existence. Totals come
    /// from a fresh pricing pass over the items, discount
    /// `amount_applied` figures are refreshed from that pass, and the
    /// payments are replayed through a [`TenderLedger`] so the
    /// no-overpayment guarantee holds no matter how the caller built the
    /// list.
    ///
    /// ## Errors
    /// - `ValidationError`: empty cart, invalid quantity, missing
    ///   identified customer on a document that requires one, or an empty
    ///   tender list on a document other than a proforma
    /// - `OverpaymentRejected`: Σ payments would exceed the order total
    pub fn commit(
        id: String,
        order_number: String,
        tenant_id: String,
        document_type: DocumentType,
        customer: Option<CustomerRef>,
        mut items: Vec<LineItem>,
        payments: Vec<PaymentEntry>,
    ) -> CoreResult<Order> {
        validate_line_count(items.len())?;
        for item in &items {
            validate_quantity(item.quantity)?;
        }
        validate_customer(document_type, customer.as_ref())?;

        if payments.is_empty() && !document_type.allows_unpaid_commit() {
            return Err(ValidationError::DocumentRule {
                reason: format!(
                    "{:?} documents require at least one tender",
                    document_type
                ),
            }
            .into());
        }

        let pricing = price_lines(&items);

        let mut ledger = TenderLedger::new(pricing.order_total());
        for payment in payments {
            ledger.add_entry(payment)?;
        }

        // amount_applied is never trusted from input; refresh it from the
        // authoritative pricing pass.
        for (item, priced) in items.iter_mut().zip(&pricing.lines) {
            if let Some(discount) = &mut item.discount {
                discount.amount_applied_cents = priced.discount_cents;
            }
        }

        let status = ledger.settlement_status();
        let now = Utc::now();

        Ok(Order {
            id,
            tenant_id,
            order_number,
            document_type,
            customer,
            items,
            subtotal_original_cents: pricing.subtotal_original_cents,
            items_discount_total_cents: pricing.items_discount_total_cents,
            subtotal_after_discounts_cents: pricing.subtotal_after_discounts_cents,
            tax_total_cents: pricing.tax_total_cents,
            order_total_cents: pricing.order_total_cents,
            payments: ledger.into_entries(),
            returns: Vec::new(),
            status,
            void_reason: None,
            voided_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    // -------------------------------------------------------------------------
    // Derived Figures
    // -------------------------------------------------------------------------

    /// The order total as Money.
    #[inline]
    pub fn order_total(&self) -> Money {
        Money::from_cents(self.order_total_cents)
    }

    /// Σ recorded tender amounts.
    pub fn amount_paid(&self) -> Money {
        self.payments.iter().map(PaymentEntry::amount).sum()
    }

    /// Outstanding balance, floored at zero.
    pub fn balance_due(&self) -> Money {
        (self.order_total() - self.amount_paid()).floor_zero()
    }

    /// Total units sold across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total units returned across all lines.
    pub fn total_returned_quantity(&self) -> i64 {
        self.returns.iter().map(|r| r.quantity).sum()
    }

    /// Units already returned for one line.
    pub fn returned_quantity(&self, product_id: &str) -> i64 {
        self.returns
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.quantity)
            .sum()
    }

    /// Finds the line for a product id.
    pub fn line(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Recomputes the status from the order's current facts.
    ///
    /// Status is a pure function of (total, paid, returned quantity, void
    /// flag); this is the single place that function lives.
    pub fn derived_status(&self) -> OrderStatus {
        if self.voided_at.is_some() {
            return OrderStatus::Voided;
        }

        let returned = self.total_returned_quantity();
        if returned > 0 {
            return if returned >= self.total_quantity() {
                OrderStatus::FullyReturned
            } else {
                OrderStatus::PartiallyReturned
            };
        }

        OrderStatus::from_settlement(self.order_total(), self.amount_paid())
    }

    // -------------------------------------------------------------------------
    // Add Payment
    // -------------------------------------------------------------------------

    /// Merges additional tenders into a partially paid order.
    ///
    /// Valid only while the status is `partially_paid`. The existing
    /// payments are replayed through a ledger and the new entries checked
    /// against the true remaining balance; status is then re-derived
    /// (`completed` once the balance reaches zero).
    pub fn add_payments(&mut self, entries: Vec<PaymentEntry>) -> CoreResult<()> {
        if !self.status.is_payable() {
            return Err(CoreError::InvariantViolation {
                order_id: self.id.clone(),
                status: self.status,
                action: "add payment",
            });
        }

        if entries.is_empty() {
            return Err(ValidationError::Required {
                field: "payments".to_string(),
            }
            .into());
        }

        // Replay existing entries, then validate the new ones against the
        // remaining balance. The order is untouched until all pass.
        let mut ledger = TenderLedger::resume(self.order_total(), self.payments.clone());
        for entry in entries {
            ledger.add_entry(entry)?;
        }

        self.payments = ledger.into_entries();
        self.status = self.derived_status();
        self.updated_at = Utc::now();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Return
    // -------------------------------------------------------------------------

    /// Records a return of units against one or more lines.
    ///
    /// Valid only from `completed` or `partially_returned`. Each requested
    /// quantity is checked against what remains returnable for its line
    /// (original quantity minus units already returned); the request is
    /// rejected whole if any line fails.
    pub fn apply_return(
        &mut self,
        lines: &[ReturnLine],
        reason: Option<&str>,
    ) -> CoreResult<()> {
        if !self.status.can_return() {
            return Err(CoreError::InvariantViolation {
                order_id: self.id.clone(),
                status: self.status,
                action: "return",
            });
        }

        if lines.is_empty() {
            return Err(ValidationError::Required {
                field: "return lines".to_string(),
            }
            .into());
        }

        let reason = match reason {
            Some(r) => Some(validate_reason("return reason", r)?),
            None => None,
        };

        // Validation pass: nothing is recorded until every line checks out.
        let mut requested: HashMap<&str, i64> = HashMap::new();
        for line in lines {
            if line.quantity <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "return quantity".to_string(),
                }
                .into());
            }
            *requested.entry(line.product_id.as_str()).or_insert(0) += line.quantity;
        }

        for (product_id, qty) in &requested {
            let item = self.line(product_id).ok_or_else(|| {
                CoreError::Validation(ValidationError::UnknownReference {
                    field: "return line".to_string(),
                    value: (*product_id).to_string(),
                })
            })?;

            let remaining = item.quantity - self.returned_quantity(product_id);
            if *qty > remaining {
                return Err(CoreError::ReturnExceedsReturnable {
                    product_id: (*product_id).to_string(),
                    requested: *qty,
                    remaining,
                });
            }
        }

        // Mutation pass.
        let now = Utc::now();
        for line in lines {
            self.returns.push(ReturnRecord {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                reason: reason.clone(),
                returned_at: now,
            });
        }

        self.status = self.derived_status();
        self.updated_at = now;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Void
    // -------------------------------------------------------------------------

    /// Voids the order as a billing correction.
    ///
    /// Requires a non-empty reason; valid only from `completed` or
    /// `partially_returned`. Irreversible - no transition leaves `voided`.
    /// Voiding does not move goods: stock stays where it is unless an
    /// explicit return was processed first.
    pub fn void(&mut self, reason: &str) -> CoreResult<()> {
        let reason = validate_reason("void reason", reason)?;

        if !self.status.can_void() {
            return Err(CoreError::InvariantViolation {
                order_id: self.id.clone(),
                status: self.status,
                action: "void",
            });
        }

        self.void_reason = Some(reason);
        self.voided_at = Some(Utc::now());
        self.status = self.derived_status();
        self.updated_at = Utc::now();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaymentMethod, Product, ProductCategory};
    use uuid::Uuid;

    fn product(id: &str, price_cents: i64, quantity_in_stock: i64) -> Product {
        Product {
            id: id.to_string(),
            tenant_id: crate::DEFAULT_TENANT_ID.to_string(),
            sku: format!("SKU-{}", id),
            name: format!("Product {}", id),
            category: ProductCategory::Frames,
            price_cents,
            tax_rate_bps: 1300,
            offer_tag: None,
            stock_on_hand: quantity_in_stock,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn entry(method: PaymentMethod, amount_cents: i64, reference: Option<&str>) -> PaymentEntry {
        PaymentEntry {
            id: Uuid::new_v4().to_string(),
            method,
            amount_cents,
            reference: reference.map(str::to_string),
            recorded_at: Utc::now(),
        }
    }

    /// One line: 10000 × 2 @ 13% = 22600 total.
    fn committed(payments: Vec<PaymentEntry>, document_type: DocumentType) -> CoreResult<Order> {
        let items = vec![LineItem::from_product(&product("p-1", 10_000, 10), 2)];
        Order::commit(
            Uuid::new_v4().to_string(),
            "20260807-01-0001".to_string(),
            crate::DEFAULT_TENANT_ID.to_string(),
            document_type,
            None,
            items,
            payments,
        )
    }

    #[test]
    fn test_commit_fully_paid_is_completed() {
        let order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.order_total_cents, 22_600);
        assert_eq!(order.balance_due().cents(), 0);
    }

    #[test]
    fn test_commit_partial_payment_is_partially_paid() {
        let order = committed(
            vec![entry(PaymentMethod::Cash, 15_000, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::PartiallyPaid);
        assert_eq!(order.balance_due().cents(), 7600);
    }

    #[test]
    fn test_commit_proforma_without_tenders_is_pending() {
        let order = committed(vec![], DocumentType::Proforma).unwrap();

        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert_eq!(order.amount_paid().cents(), 0);
    }

    #[test]
    fn test_commit_non_proforma_requires_tenders() {
        let err = committed(vec![], DocumentType::Ticket).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_commit_empty_cart_rejected() {
        let err = Order::commit(
            Uuid::new_v4().to_string(),
            "20260807-01-0002".to_string(),
            crate::DEFAULT_TENANT_ID.to_string(),
            DocumentType::Ticket,
            None,
            vec![],
            vec![entry(PaymentMethod::Cash, 100, None)],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_commit_invoice_requires_identified_customer() {
        let err = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Invoice,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let items = vec![LineItem::from_product(&product("p-1", 10_000, 10), 2)];
        let order = Order::commit(
            Uuid::new_v4().to_string(),
            "20260807-01-0003".to_string(),
            crate::DEFAULT_TENANT_ID.to_string(),
            DocumentType::Invoice,
            Some(CustomerRef {
                id: "c-9".to_string(),
                name: "A. Patient".to_string(),
            }),
            items,
            vec![entry(PaymentMethod::Cash, 22_600, None)],
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_commit_rejects_overpaying_tender_list() {
        let err = committed(
            vec![
                entry(PaymentMethod::Cash, 20_000, None),
                entry(PaymentMethod::Cash, 5000, None),
            ],
            DocumentType::Ticket,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::OverpaymentRejected { .. }));
    }

    #[test]
    fn test_add_payment_completes_order() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 15_000, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        order
            .add_payments(vec![entry(PaymentMethod::Card, 7600, Some("REF1"))])
            .unwrap();

        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.balance_due().cents(), 0);
        assert_eq!(order.payments.len(), 2);
    }

    #[test]
    fn test_add_payment_partial_stays_partially_paid() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 10_000, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        order
            .add_payments(vec![entry(PaymentMethod::Cash, 5000, None)])
            .unwrap();

        assert_eq!(order.status, OrderStatus::PartiallyPaid);
        assert_eq!(order.balance_due().cents(), 7600);
    }

    #[test]
    fn test_add_payment_rejected_on_completed_order() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let err = order
            .add_payments(vec![entry(PaymentMethod::Cash, 100, None)])
            .unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation { .. }));
        assert_eq!(order.payments.len(), 1);
    }

    #[test]
    fn test_add_payment_rejected_on_pending_proforma() {
        let mut order = committed(vec![], DocumentType::Proforma).unwrap();

        let err = order
            .add_payments(vec![entry(PaymentMethod::Cash, 100, None)])
            .unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation { .. }));
    }

    #[test]
    fn test_add_payment_overpayment_leaves_order_untouched() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 15_000, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let err = order
            .add_payments(vec![
                entry(PaymentMethod::Cash, 5000, None),
                entry(PaymentMethod::Cash, 5000, None),
            ])
            .unwrap_err();
        assert!(matches!(err, CoreError::OverpaymentRejected { .. }));

        // All-or-nothing: the first valid entry was not kept either
        assert_eq!(order.payments.len(), 1);
        assert_eq!(order.status, OrderStatus::PartiallyPaid);
    }

    #[test]
    fn test_partial_return() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 1,
                }],
                Some("scratched lens"),
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::PartiallyReturned);
        assert_eq!(order.returned_quantity("p-1"), 1);
    }

    #[test]
    fn test_full_return_across_steps() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap();
        assert_eq!(order.status, OrderStatus::PartiallyReturned);

        order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap();
        assert_eq!(order.status, OrderStatus::FullyReturned);
        assert_eq!(order.total_returned_quantity(), order.total_quantity());
    }

    #[test]
    fn test_return_monotonicity_enforced() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let err = order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 3,
                }],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::ReturnExceedsReturnable { .. }));
        assert!(order.returns.is_empty());

        // Duplicate lines in one request are summed before checking
        let err = order
            .apply_return(
                &[
                    ReturnLine {
                        product_id: "p-1".to_string(),
                        quantity: 1,
                    },
                    ReturnLine {
                        product_id: "p-1".to_string(),
                        quantity: 2,
                    },
                ],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::ReturnExceedsReturnable { .. }));
        assert!(order.returns.is_empty());
    }

    #[test]
    fn test_return_unknown_line_rejected() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let err = order
            .apply_return(
                &[ReturnLine {
                    product_id: "nope".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_return_rejected_on_pending_order() {
        let mut order = committed(vec![], DocumentType::Proforma).unwrap();

        let err = order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation { .. }));
    }

    #[test]
    fn test_void_requires_reason() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let err = order.void("").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_void_from_partially_returned() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();
        order
            .apply_return(
                &[ReturnLine {
                    product_id: "p-1".to_string(),
                    quantity: 1,
                }],
                None,
            )
            .unwrap();

        order.void("customer cancelled").unwrap();
        assert_eq!(order.status, OrderStatus::Voided);
        assert_eq!(order.void_reason.as_deref(), Some("customer cancelled"));
        assert!(order.voided_at.is_some());
    }

    #[test]
    fn test_voided_is_terminal() {
        let mut order = committed(
            vec![entry(PaymentMethod::Cash, 15_000, None)],
            DocumentType::Ticket,
        )
        .unwrap();
        order
            .add_payments(vec![entry(PaymentMethod::Card, 7600, Some("REF1"))])
            .unwrap();
        order.void("billing error").unwrap();

        // Every subsequent operation fails with InvariantViolation
        assert!(matches!(
            order
                .add_payments(vec![entry(PaymentMethod::Cash, 100, None)])
                .unwrap_err(),
            CoreError::InvariantViolation { .. }
        ));
        assert!(matches!(
            order
                .apply_return(
                    &[ReturnLine {
                        product_id: "p-1".to_string(),
                        quantity: 1,
                    }],
                    None,
                )
                .unwrap_err(),
            CoreError::InvariantViolation { .. }
        ));
        assert!(matches!(
            order.void("again").unwrap_err(),
            CoreError::InvariantViolation { .. }
        ));
        assert_eq!(order.status, OrderStatus::Voided);
    }

    #[test]
    fn test_void_rejected_on_pending_payment() {
        let mut order = committed(vec![], DocumentType::Proforma).unwrap();

        let err = order.void("wrong quote").unwrap_err();
        assert!(matches!(err, CoreError::InvariantViolation { .. }));
    }

    #[test]
    fn test_discount_amount_applied_refreshed_on_commit() {
        let mut items = vec![LineItem::from_product(&product("p-1", 10_000, 10), 2)];
        items[0].discount = Some({
            let mut d = crate::types::Discount::manual_percentage(1000, "loyalty");
            // Poisoned input: the stored figure must be recomputed
            d.amount_applied_cents = 999_999;
            d
        });

        let order = Order::commit(
            Uuid::new_v4().to_string(),
            "20260807-01-0004".to_string(),
            crate::DEFAULT_TENANT_ID.to_string(),
            DocumentType::Ticket,
            None,
            items,
            vec![entry(PaymentMethod::Cash, 20_340, None)],
        )
        .unwrap();

        assert_eq!(
            order.items[0].discount.as_ref().unwrap().amount_applied_cents,
            2000
        );
        assert_eq!(order.order_total_cents, 20_340);
    }

    #[test]
    fn test_order_round_trips_through_json() {
        let order = committed(
            vec![entry(PaymentMethod::Cash, 22_600, None)],
            DocumentType::Ticket,
        )
        .unwrap();

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
