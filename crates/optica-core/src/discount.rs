//! # Discount Resolver
//!
//! Decides whether an automatic tag discount applies to a newly added line
//! and enforces the mutual-exclusion rule between tag and manual discounts.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Product added to cart                                              │
//! │       │                                                             │
//! │       ├── offer_tag = None ────────────► no discount                │
//! │       │                                                             │
//! │       ├── tag resolves to config ──────► percentage Discount        │
//! │       │   (snapshot: later tag edits      source = TagOffer         │
//! │       │    never touch this line)         reason = "tag offer <x>"  │
//! │       │                                                             │
//! │       └── tag unknown / deleted ───────► no discount, no error      │
//! │                                                                     │
//! │  Manual discount path                                               │
//! │       ├── line has tag discount ───────► TagDiscountLocked          │
//! │       └── untagged line ───────────────► value > 0, then attach     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{Discount, DiscountKind, DiscountSource, LineItem, Product, TagOffer};
use crate::validation::{validate_fixed_discount, validate_percentage_bps};
use crate::Money;

// =============================================================================
// Tag Resolution
// =============================================================================

/// Resolves the automatic discount for a product being added to the cart.
///
/// `resolved` is the tag configuration looked up by the caller (the engine
/// owns the `DiscountTagConfig` collaborator). A product without a tag, or
/// whose tag no longer exists in the configuration, gets no discount -
/// silently, per the "treat missing tags as no offer" rule.
pub fn resolve_tag_discount(product: &Product, resolved: Option<TagOffer>) -> Option<Discount> {
    product.offer_tag.as_ref()?;

    let offer = resolved?;
    if offer.percentage_bps == 0 {
        // A zero-percent tag is configuration noise, not an offer.
        return None;
    }

    Some(Discount::from_tag(&offer))
}

// =============================================================================
// Manual Discounts
// =============================================================================

/// Attaches a manual discount to a line.
///
/// Fails with [`CoreError::TagDiscountLocked`] when the line already
/// carries a tag-sourced discount; replaces any previous manual discount
/// otherwise. Fixed values are clamped to the line subtotal at pricing
/// time, not here.
pub fn apply_manual_discount(line: &mut LineItem, discount: Discount) -> CoreResult<()> {
    if let Some(existing) = &line.discount {
        if existing.is_tag_sourced() {
            return Err(CoreError::TagDiscountLocked {
                product_id: line.product_id.clone(),
            });
        }
    }

    debug_assert_eq!(discount.source, DiscountSource::Manual);

    match discount.kind {
        DiscountKind::Percentage { bps } => validate_percentage_bps(bps)?,
        DiscountKind::Fixed { amount_cents } => {
            validate_fixed_discount(Money::from_cents(amount_cents))?
        }
    }

    line.discount = Some(discount);
    Ok(())
}

/// Removes the manual discount from a line.
///
/// Tag-sourced discounts cannot be removed here; only removing the line
/// from the cart clears them.
pub fn remove_manual_discount(line: &mut LineItem) -> CoreResult<()> {
    if let Some(existing) = &line.discount {
        if existing.is_tag_sourced() {
            return Err(CoreError::TagDiscountLocked {
                product_id: line.product_id.clone(),
            });
        }
    }

    line.discount = None;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
