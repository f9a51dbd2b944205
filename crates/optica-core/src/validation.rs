//! # Validation Module
//!
//! Input validation for the settlement engine.
//!
//! Validation always runs before business logic mutates anything: a
//! rejected input leaves every aggregate untouched. The dashboard performs
//! its own cosmetic checks; these are the authoritative rules.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{CustomerRef, DocumentType, PaymentMethod};
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a tender amount.
///
/// ## Rules
/// - Must be positive (> 0); zero or negative tenders are never recorded
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage in basis points.
///
/// ## Rules
/// - Must be positive and at most 10000 (100%)
pub fn validate_percentage_bps(bps: u32) -> ValidationResult<()> {
    if bps == 0 {
        return Err(ValidationError::MustBePositive {
            field: "discount percentage".to_string(),
        });
    }

    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount percentage".to_string(),
            min: 1,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates a fixed discount amount.
///
/// The value is clamped to the line subtotal at pricing time; here we only
/// reject non-positive input.
pub fn validate_fixed_discount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "discount amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of lines on an order.
///
/// ## Rules
/// - At least one line
/// - Must not exceed MAX_ORDER_LINES (100)
pub fn validate_line_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::Required {
            field: "line items".to_string(),
        });
    }

    if count > MAX_ORDER_LINES {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 1,
            max: MAX_ORDER_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a free-text reason (return reason, void reason).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 500 characters
///
/// ## Returns
/// The trimmed reason string.
pub fn validate_reason(field: &str, reason: &str) -> ValidationResult<String> {
    let reason = reason.trim();

    if reason.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if reason.len() > 500 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 500,
        });
    }

    Ok(reason.to_string())
}

/// Validates the reference accompanying a tender.
///
/// ## Rules
/// - Cash never requires a reference
/// - Every other method requires a non-empty reference
pub fn validate_reference(
    method: PaymentMethod,
    reference: Option<&str>,
) -> ValidationResult<()> {
    if !method.requires_reference() {
        return Ok(());
    }

    match reference {
        Some(r) if !r.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required {
            field: "payment reference".to_string(),
        }),
    }
}

/// Validates the customer attached to a document.
///
/// ## Rules
/// - The generic walk-in placeholder (`None`) is allowed everywhere except
///   on document types that require an identified customer (invoices)
pub fn validate_customer(
    document_type: DocumentType,
    customer: Option<&CustomerRef>,
) -> ValidationResult<()> {
    if document_type.requires_customer() && customer.is_none() {
        return Err(ValidationError::DocumentRule {
            reason: format!(
                "{:?} documents require an identified customer",
                document_type
            ),
        });
    }

    Ok(())
}

/// Validates a UUID string format.
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
