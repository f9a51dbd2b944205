//! # Tender Ledger
//!
//! Accumulates payment entries against a known order total, tracking the
//! running balance.
//!
//! ## Guarantees
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  At any point:  Σ entry.amount ≤ order_total                        │
//! │                                                                     │
//! │  add_tender rejects                                                 │
//! │    • amount ≤ 0                      (ValidationError)              │
//! │    • missing reference on non-cash   (ValidationError)              │
//! │    • amount > remaining balance      (OverpaymentRejected)          │
//! │                                                                     │
//! │  remove_tender recomputes the balance by re-summing the remaining   │
//! │  entries - never by naive subtraction, so the balance cannot drift. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//! No overpayment is ever recorded: cash change due is computed with
//! [`TenderLedger::change_for`] without entering the ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{OrderStatus, PaymentEntry, PaymentMethod};
use crate::validation::{validate_payment_amount, validate_reference};

// =============================================================================
// Tender Ledger
// =============================================================================

/// Accumulates tenders against an order total.
///
/// Used in two places: building the tender list during checkout, and
/// replaying an order's existing payments when merging additional ones
/// (so both paths enforce the same no-overpayment rule).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenderLedger {
    order_total: Money,
    entries: Vec<PaymentEntry>,
}

impl TenderLedger {
    /// Creates an empty ledger for the given order total.
    pub fn new(order_total: Money) -> Self {
        TenderLedger {
            order_total,
            entries: Vec::new(),
        }
    }

    /// Rebuilds a ledger from an order's already-recorded payments.
    ///
    /// The stored entries were validated when first recorded; replaying
    /// them here lets additional tenders be checked against the same
    /// remaining balance.
    pub fn resume(order_total: Money, entries: Vec<PaymentEntry>) -> Self {
        TenderLedger {
            order_total,
            entries,
        }
    }

    /// The order total this ledger settles against.
    #[inline]
    pub fn order_total(&self) -> Money {
        self.order_total
    }

    /// Σ of all recorded tender amounts.
    pub fn total_tendered(&self) -> Money {
        self.entries.iter().map(PaymentEntry::amount).sum()
    }

    /// Remaining balance: order total − Σ amounts.
    ///
    /// Never negative, because no tender that would overpay is ever
    /// recorded.
    pub fn remaining_balance(&self) -> Money {
        self.order_total - self.total_tendered()
    }

    /// Whether no tender has been recorded yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, in insertion order.
    #[inline]
    pub fn entries(&self) -> &[PaymentEntry] {
        &self.entries
    }

    /// Consumes the ledger, yielding the recorded entries.
    #[inline]
    pub fn into_entries(self) -> Vec<PaymentEntry> {
        self.entries
    }

    /// Records a new tender.
    ///
    /// ## Errors
    /// - `ValidationError` for non-positive amounts or a missing reference
    ///   on a method that requires one
    /// - `OverpaymentRejected` when the amount exceeds the remaining
    ///   balance; the ledger is left unchanged
    pub fn add_tender(
        &mut self,
        method: PaymentMethod,
        amount: Money,
        reference: Option<String>,
    ) -> CoreResult<&PaymentEntry> {
        let entry = PaymentEntry {
            id: Uuid::new_v4().to_string(),
            method,
            amount_cents: amount.cents(),
            reference,
            recorded_at: chrono::Utc::now(),
        };
        self.add_entry(entry)?;

        // Just pushed, so the list is non-empty.
        Ok(self.entries.last().expect("entry just recorded"))
    }

    /// Records an already-constructed entry after full validation.
    pub fn add_entry(&mut self, entry: PaymentEntry) -> CoreResult<()> {
        let amount = entry.amount();
        validate_payment_amount(amount)?;
        validate_reference(entry.method, entry.reference.as_deref())?;

        let remaining = self.remaining_balance();
        if amount > remaining {
            return Err(CoreError::OverpaymentRejected {
                offered: amount,
                remaining,
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Removes a tender by entry id, returning the removed entry.
    ///
    /// The balance is recomputed from the surviving entries on the next
    /// read; nothing is cached.
    pub fn remove_tender(&mut self, entry_id: &str) -> CoreResult<PaymentEntry> {
        match self.entries.iter().position(|e| e.id == entry_id) {
            Some(idx) => Ok(self.entries.remove(idx)),
            None => Err(ValidationError::UnknownReference {
                field: "tender".to_string(),
                value: entry_id.to_string(),
            }
            .into()),
        }
    }

    /// Change due if `offered` cash were applied to the remaining balance.
    ///
    /// Computed for display only - the recorded tender is the remaining
    /// balance itself, never the offered amount.
    pub fn change_for(&self, offered: Money) -> Money {
        (offered - self.remaining_balance()).floor_zero()
    }

    /// Derives the settlement status this ledger would produce at commit.
    pub fn settlement_status(&self) -> OrderStatus {
        OrderStatus::from_settlement(self.order_total, self.total_tendered())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
