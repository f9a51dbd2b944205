//! # Error Types
//!
//! Domain-specific error types for optica-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ValidationError     malformed input; caller corrects and retries   │
//! │  CoreError           business rule failures:                        │
//! │  ├── Validation        (wraps ValidationError)                      │
//! │  ├── InvariantViolation  transition not permitted by status         │
//! │  ├── TagDiscountLocked   manual discount on a tag-discounted line   │
//! │  ├── ReturnExceedsReturnable  more units than remain returnable     │
//! │  ├── InsufficientStock   stocked line exceeds available stock       │
//! │  └── OverpaymentRejected tender would exceed remaining balance      │
//! │                                                                     │
//! │  Every operation is all-or-nothing: on any error the order, ledger  │
//! │  and stock state are exactly as before the call.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;
use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core settlement errors.
///
/// All variants are caller-correctable; none is fatal. They should be
/// caught by the dashboard and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempted lifecycle action not permitted by the order's current
    /// status (e.g. return on a voided order, add-payment on a completed
    /// order, void on a pending quote).
    #[error("order {order_id} is {status:?}: {action} is not permitted")]
    InvariantViolation {
        order_id: String,
        status: OrderStatus,
        action: &'static str,
    },

    /// A return requested more units than remain returnable for a line
    /// (original quantity minus units already returned).
    #[error("return of {requested} exceeds remaining returnable {remaining} for {product_id}")]
    ReturnExceedsReturnable {
        product_id: String,
        requested: i64,
        remaining: i64,
    },

    /// Manual-discount path attempted on a line whose discount was
    /// attached by a promotional tag. Tag discounts are cleared only by
    /// removing the line.
    #[error("line {product_id} carries a tag offer; manual discounts are locked")]
    TagDiscountLocked { product_id: String },

    /// Insufficient stock for a stocked (non-service) line at cart-add or
    /// commit time.
    #[error("insufficient stock for {sku}: available {available}, requested {requested}")]
    InsufficientStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// A tender would push the amount paid above the order total. The
    /// tender is not recorded; no overpayment ever enters the ledger.
    #[error("tender of {offered} exceeds remaining balance {remaining}")]
    OverpaymentRejected { offered: Money, remaining: Money },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when input doesn't meet requirements; they are rejected
/// before any mutation happens.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A reference points at something not part of the aggregate
    /// (e.g. a return line naming a product that is not on the order).
    #[error("{field} '{value}' is not part of this order")]
    UnknownReference { field: String, value: String },

    /// The referenced item exists but is not sellable (inactive product).
    #[error("{field} '{value}' is not available for sale")]
    Unavailable { field: String, value: String },

    /// The document type's business rules reject this input
    /// (e.g. invoice without an identified customer).
    #[error("{reason}")]
    DocumentRule { reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            sku: "FR-AVIATOR".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for FR-AVIATOR: available 3, requested 5"
        );

        let err = CoreError::OverpaymentRejected {
            offered: Money::from_cents(25_000),
            remaining: Money::from_cents(20_340),
        };
        assert_eq!(
            err.to_string(),
            "tender of 250.00 exceeds remaining balance 203.40"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "void reason".to_string(),
        };
        assert_eq!(err.to_string(), "void reason is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "reference".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
