//! Shopping Cart
//!
//! This example demonstrates the cart reducer and checkout totals.
//!
//! Key concepts:
//! - Adding, increasing and stepping down product quantities
//! - Coupon codes from the cart configuration
//! - Totals derived from state, never stored in it
//! - Persisting the cart with a snapshot and restoring it
//!
//! Run with: cargo run --example shopping_cart

use pureform::cart::{totals, CartAction, CartReducer, CartState, Product, ProductId};
use pureform::Store;
use tracing_subscriber::EnvFilter;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Espresso beans", 18.9, "1kg, dark roast"),
        Product::new(2, "Pour-over kettle", 42.0, "Gooseneck, 1L"),
        Product::new(3, "Paper filters", 4.35, "Pack of 100"),
    ]
}

fn print_cart(store: &Store<CartReducer>) {
    store.with_state(|state: &CartState| {
        for item in &state.items {
            println!(
                "  {:>2} × {:<18} {:>8.2}",
                state.quantity_of(item.id),
                item.name,
                item.price
            );
        }
        let summary = totals(state, store.reducer().config());
        println!("  Subtotal  {:>8.2}", summary.subtotal);
        println!("  Tax       {:>8.2}", summary.tax);
        println!("  Shipping  {:>8.2}", summary.shipping);
        if let Some(discount) = &state.discount {
            println!("  {:<9} -{:>7.2}", discount.code, summary.discount);
        }
        println!("  Total     {:>8.2}\n", summary.grand_total);
    });
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Shopping Cart Example ===\n");

    let store = Store::new(CartReducer::default());
    let products = catalog();

    println!("Scenario 1: Fill the cart");
    for product in &products {
        store.dispatch(CartAction::Add {
            product: product.clone(),
        });
    }
    store.dispatch(CartAction::Increase { id: ProductId(3) });
    store.dispatch(CartAction::Increase { id: ProductId(3) });
    print_cart(&store);

    println!("Scenario 2: Step quantities down");
    for id in [ProductId(2), ProductId(3)] {
        let action = store.with_state(|state| CartAction::step_down(state, id));
        println!("  {id} -> {action:?}");
        store.dispatch(action);
    }
    println!();
    print_cart(&store);

    println!("Scenario 3: Coupons");
    store.dispatch(CartAction::Discount {
        code: "NOT-A-CODE".into(),
    });
    println!("  Unknown coupon ignored");
    store.dispatch(CartAction::Discount {
        code: "20OFF".into(),
    });
    print_cart(&store);

    println!("Scenario 4: Snapshot and restore");
    match store.snapshot().to_json() {
        Ok(json) => {
            println!("  Snapshot is {} bytes of JSON", json.len());
            match pureform::snapshot::Snapshot::from_json(&json) {
                Ok(snapshot) => {
                    let restored = Store::restore(CartReducer::default(), snapshot);
                    println!("  ✓ Restored cart holds {} units\n", restored.state().cart);
                }
                Err(e) => println!("  ✗ Restore failed: {e}\n"),
            }
        }
        Err(e) => println!("  ✗ Snapshot failed: {e}\n"),
    }

    println!("=== Example Complete ===");
}
