//! # Settlement Walkthrough
//!
//! Seeds an in-memory catalog with clinic products and walks a scripted
//! sale through the full settlement lifecycle: cart build with automatic
//! tag offers, split-tender checkout, balance settlement, partial return,
//! and void.
//!
//! ## Usage
//! ```bash
//! cargo run -p optica-engine --bin demo
//!
//! # With operation-level logging
//! RUST_LOG=debug cargo run -p optica-engine --bin demo
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use optica_core::{
    discount, Discount, DocumentType, PaymentMethod, Product, ProductCategory, ReturnLine,
    TagOffer, DEFAULT_TENANT_ID,
};
use optica_engine::{
    MemoryCatalog, MemoryOrderStore, MemoryTagConfig, ProductCatalog, SettlementService,
    StoreConfig, TenderRequest,
};

/// Seed catalog: (sku, name, category, price_cents, stock, offer_tag).
const CATALOG: &[(&str, &str, ProductCategory, i64, i64, Option<&str>)] = &[
    (
        "FR-AVIATOR",
        "Aviator Frame",
        ProductCategory::Frames,
        10_000,
        10,
        None,
    ),
    (
        "LN-SV-156",
        "Single Vision Lens 1.56",
        ProductCategory::Lenses,
        6500,
        30,
        None,
    ),
    (
        "CL-MONTH-6",
        "Monthly Contact Lenses 6pk",
        ProductCategory::ContactLenses,
        8900,
        15,
        None,
    ),
    (
        "SOL-250",
        "Lens Solution 250ml",
        ProductCategory::Solutions,
        4500,
        20,
        Some("SUMMER15"),
    ),
    (
        "AC-CASE",
        "Hard Shell Case",
        ProductCategory::Accessories,
        1500,
        40,
        None,
    ),
    (
        "SV-EXAM",
        "Eye Exam",
        ProductCategory::Service,
        5000,
        0,
        None,
    ),
];

/// Standard sales-tax rate in basis points.
const TAX_RATE_BPS: u32 = 1300;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("Optica POS Settlement Walkthrough");
    println!("=================================");
    println!();

    // -------------------------------------------------------------------------
    // Seed collaborators
    // -------------------------------------------------------------------------

    let catalog = Arc::new(MemoryCatalog::new());
    for (sku, name, category, price_cents, stock, offer_tag) in CATALOG {
        catalog.insert(seed_product(sku, name, *category, *price_cents, *stock, *offer_tag));
    }

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

    println!("✓ Seeded {} products, 1 discount tag", catalog.len());
    println!();

    // -------------------------------------------------------------------------
    // 1. Build a cart
    // -------------------------------------------------------------------------

    println!("1. Building cart");

    let frames_id = product_id(&catalog, "FR-AVIATOR");
    let exam_id = product_id(&catalog, "SV-EXAM");
    let solution_id = product_id(&catalog, "SOL-250");

    let mut frames = service.build_line(&frames_id, 2)?;
    discount::apply_manual_discount(
        &mut frames,
        Discount::manual_percentage(1000, "loyalty program"),
    )?;
    let exam = service.build_line(&exam_id, 1)?;
    let solution = service.build_line(&solution_id, 2)?;

    if let Some(d) = &solution.discount {
        println!("   {} picked up automatic offer: {}", solution.sku, d.reason);
    }

    let items = vec![frames, exam, solution];
    let pricing = service.price_cart(&items);
    println!("   subtotal        {:>10}", pricing.subtotal_original_cents);
    println!("   discounts       {:>10}", pricing.items_discount_total_cents);
    println!("   tax             {:>10}", pricing.tax_total_cents);
    println!("   order total     {:>10}", pricing.order_total_cents);
    println!();

    // -------------------------------------------------------------------------
    // 2. Split-tender checkout
    // -------------------------------------------------------------------------

    println!("2. Checkout: 15000 cash now, rest later");

    let order = service.commit_checkout(
        items,
        &[TenderRequest {
            method: PaymentMethod::Cash,
            amount_cents: 15_000,
            reference: None,
        }],
        DocumentType::Ticket,
        None,
    )?;

    println!("   order {} committed", order.order_number);
    println!("   status: {:?}", order.status);
    println!("   balance due: {}", order.balance_due());
    println!(
        "   frame stock after sale: {}",
        catalog.get(&frames_id)?.stock_on_hand
    );
    println!();

    // -------------------------------------------------------------------------
    // 3. Settle the balance by card
    // -------------------------------------------------------------------------

    println!("3. Settling balance by card");

    let balance = order.balance_due().cents();
    let order = service.add_payment(
        &order.id,
        &[TenderRequest {
            method: PaymentMethod::Card,
            amount_cents: balance,
            reference: Some("AUTH-48213".to_string()),
        }],
    )?;

    println!("   status: {:?}", order.status);
    println!("   balance due: {}", order.balance_due());
    println!();

    // -------------------------------------------------------------------------
    // 4. Customer returns one frame
    // -------------------------------------------------------------------------

    println!("4. Returning 1 frame");

    let order = service.process_return(
        &order.id,
        &[ReturnLine {
            product_id: frames_id.clone(),
            quantity: 1,
        }],
        Some("scratched on pickup"),
    )?;

    println!("   status: {:?}", order.status);
    println!(
        "   frame stock after return: {}",
        catalog.get(&frames_id)?.stock_on_hand
    );
    println!();

    // -------------------------------------------------------------------------
    // 5. Void the remainder as a billing correction
    // -------------------------------------------------------------------------

    println!("5. Voiding the order");

    // An empty reason is rejected before anything changes
    let rejected = service.void_order(&order.id, "");
    println!("   void with empty reason: {}", rejected.unwrap_err());

    let order = service.void_order(&order.id, "cashier rang up the wrong patient")?;
    println!("   status: {:?}", order.status);
    println!(
        "   frame stock after void (unchanged): {}",
        catalog.get(&frames_id)?.stock_on_hand
    );
    println!();

    // -------------------------------------------------------------------------
    // 6. Receipt projection
    // -------------------------------------------------------------------------

    println!("6. Receipt");
    let receipt = service.receipt(&order.id)?;
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    println!();

    println!("✓ Walkthrough complete ({} order stored)", orders.count());
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show each operation as it runs
/// - Default: INFO level (state-changing successes only)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,optica=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn seed_product(
    sku: &str,
    name: &str,
    category: ProductCategory,
    price_cents: i64,
    stock: i64,
    offer_tag: Option<&str>,
) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        tenant_id: DEFAULT_TENANT_ID.to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        category,
        price_cents,
        tax_rate_bps: TAX_RATE_BPS,
        offer_tag: offer_tag.map(str::to_string),
        stock_on_hand: stock,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Looks up the generated id for a seeded SKU.
fn product_id(catalog: &MemoryCatalog, sku: &str) -> String {
    catalog
        .find_by_sku(sku)
        .map(|p| p.id)
        .unwrap_or_else(|| panic!("seeded product missing: {}", sku))
}
