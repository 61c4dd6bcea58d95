//! Calculator
//!
//! This example drives the calculator reducer through a `Store`, the way a
//! keypad UI would.
//!
//! Key concepts:
//! - Button presses dispatched as actions
//! - A subscriber re-rendering the display after each dispatch
//! - Operators replacing each other instead of stacking
//! - Failed evaluations shown as an error display
//!
//! Run with: cargo run --example calculator

use pureform::calculator::{prettify_display, CalculatorAction, CalculatorReducer};
use pureform::Store;
use tracing_subscriber::EnvFilter;

fn press(store: &Store<CalculatorReducer>, keys: &[CalculatorAction]) {
    for key in keys {
        store.dispatch(key.clone());
    }
}

fn digit(n: &str) -> CalculatorAction {
    CalculatorAction::Number(n.to_string())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Calculator Example ===\n");

    let store = Store::new(CalculatorReducer);
    let display = store.downgrade();
    let _render = store.subscribe(move || {
        if let Some(store) = display.upgrade() {
            store.with_state(|state| {
                println!(
                    "  [{:>12}] {}",
                    prettify_display(&state.last, true),
                    prettify_display(&state.current, false)
                );
            });
        }
    });

    println!("Scenario 1: 12 × 3 − 4");
    press(
        &store,
        &[
            digit("12"),
            CalculatorAction::Multi,
            digit("3"),
            CalculatorAction::Minus,
            digit("4"),
            CalculatorAction::Equal,
        ],
    );
    println!("  ✓ Result: {}\n", store.state().current);

    println!("Scenario 2: Floating point");
    press(
        &store,
        &[
            CalculatorAction::Clear,
            CalculatorAction::Dot,
            digit("1"),
            CalculatorAction::Add,
            CalculatorAction::Dot,
            digit("2"),
            CalculatorAction::Equal,
        ],
    );
    println!("  ✓ 0.1 + 0.2 shows {}\n", store.state().current);

    println!("Scenario 3: Changing the operator");
    press(
        &store,
        &[
            CalculatorAction::Clear,
            digit("8"),
            CalculatorAction::Add,
            CalculatorAction::Divide,
            digit("2"),
            CalculatorAction::Equal,
        ],
    );
    println!("  ✓ 8 + ÷ 2 evaluates as 8 ÷ 2 = {}\n", store.state().current);

    println!("Scenario 4: Incomplete expression");
    press(
        &store,
        &[CalculatorAction::Clear, digit("3"), CalculatorAction::Add, CalculatorAction::Equal],
    );
    println!("  ✗ {}\n", store.state().current);

    println!("=== Example Complete ===");
}
