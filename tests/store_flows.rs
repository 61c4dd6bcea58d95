//! End-to-end flows through `Store` with the calculator and cart reducers.

use pureform::calculator::{CalculatorAction, CalculatorReducer, ERROR_DISPLAY};
use pureform::cart::{totals, CartAction, CartActionKind, CartConfig, CartReducer, Product, ProductId};
use pureform::snapshot::Snapshot;
use pureform::Store;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn notebook() -> Product {
    Product::new(1, "Notebook", 10.0, "A5, dotted")
}

fn pen() -> Product {
    Product::new(2, "Pen", 2.5, "Black ink")
}

#[test]
fn calculator_evaluates_typed_expression() {
    let store = Store::new(CalculatorReducer);

    for action in [
        CalculatorAction::Number("3".into()),
        CalculatorAction::Add,
        CalculatorAction::Number("4".into()),
        CalculatorAction::Equal,
    ] {
        store.dispatch(action);
    }

    let state = store.state();
    assert_eq!(state.current, "7");
    assert_eq!(state.last, "3+4");
}

#[test]
fn calculator_operator_replaces_previous_operator() {
    let store = Store::new(CalculatorReducer);
    store.dispatch(CalculatorAction::Number("3".into()));
    store.dispatch(CalculatorAction::Add);
    store.dispatch(CalculatorAction::Add);

    assert_eq!(store.state().current, "3+");
}

#[test]
fn calculator_error_keeps_expression_in_last() {
    let store = Store::new(CalculatorReducer);
    store.dispatch(CalculatorAction::Number("3".into()));
    store.dispatch(CalculatorAction::Multi);
    store.dispatch(CalculatorAction::Equal);

    let state = store.state();
    assert_eq!(state.current, ERROR_DISPLAY);
    assert_eq!(state.last, "3*");
}

#[test]
fn unsubscribe_twice_removes_listener_once() {
    let store = Store::new(CalculatorReducer);
    let calls = Rc::new(Cell::new(0));
    let other_calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let subscription = store.subscribe(move || counter.set(counter.get() + 1));
    let other = Rc::clone(&other_calls);
    let _kept = store.subscribe(move || other.set(other.get() + 1));

    store.dispatch(CalculatorAction::Number("1".into()));
    assert!(subscription.unsubscribe());
    assert!(!subscription.unsubscribe());
    store.dispatch(CalculatorAction::Number("2".into()));

    assert_eq!(calls.get(), 1);
    assert_eq!(other_calls.get(), 2);
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn listener_reads_new_state_through_weak_handle() {
    let store = Store::new(CartReducer::default());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let handle = store.downgrade();
    let log = Rc::clone(&seen);
    let _subscription = store.subscribe(move || {
        if let Some(store) = handle.upgrade() {
            log.borrow_mut().push(store.with_state(|state| state.cart));
        }
    });

    store.dispatch(CartAction::Add { product: notebook() });
    store.dispatch(CartAction::Add { product: pen() });
    store.dispatch(CartAction::Increase { id: ProductId(1) });

    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn cart_checkout_totals() {
    let store = Store::new(CartReducer::default());
    store.dispatch(CartAction::Add { product: notebook() });
    store.dispatch(CartAction::Increase { id: ProductId(1) });

    let state = store.state();
    assert_eq!(state.cart, 2);
    assert_eq!(state.action, Some(CartActionKind::Increase));

    let summary = totals(&state, store.reducer().config());
    assert_eq!(summary.subtotal, 20.0);
    assert_eq!(summary.tax, 1.0);
    assert_eq!(summary.shipping, 15.0);
    assert_eq!(summary.grand_total, 36.0);
}

#[test]
fn cart_coupon_reduces_grand_total() {
    let store = Store::new(CartReducer::default());
    store.dispatch(CartAction::Add { product: notebook() });
    store.dispatch(CartAction::Increase { id: ProductId(1) });
    store.dispatch(CartAction::Discount { code: "20OFF".into() });

    let state = store.state();
    let summary = totals(&state, store.reducer().config());
    assert_eq!(summary.discount, 4.0);
    assert_eq!(summary.grand_total, 32.0);

    store.dispatch(CartAction::Discount { code: "NOPE".into() });
    assert_eq!(store.state(), state);
}

#[test]
fn cart_step_down_removes_last_unit() {
    let store = Store::new(CartReducer::default());
    store.dispatch(CartAction::Add { product: notebook() });
    store.dispatch(CartAction::Add { product: pen() });

    let action = store.with_state(|state| CartAction::step_down(state, ProductId(2)));
    store.dispatch(action);

    let state = store.state();
    assert_eq!(state.cart, 1);
    assert!(state.find(ProductId(2)).is_none());
    assert_eq!(state.action, Some(CartActionKind::Remove));
}

#[test]
fn custom_config_drives_totals() {
    let config = CartConfig::from_json(r#"{ "tax_rate": 0.1, "shipping_fee": 0 }"#).unwrap();
    let store = Store::new(CartReducer::new(config));
    store.dispatch(CartAction::Add { product: pen() });

    let summary = totals(&store.state(), store.reducer().config());
    assert_eq!(summary.tax, 0.25);
    assert_eq!(summary.grand_total, 2.75);
}

#[test]
fn cart_survives_snapshot_restore() {
    let store = Store::new(CartReducer::default());
    store.dispatch(CartAction::Add { product: notebook() });
    store.dispatch(CartAction::Add { product: pen() });
    store.dispatch(CartAction::Discount { code: "BIGSALE".into() });

    let json = store.snapshot().to_json().unwrap();
    let snapshot = Snapshot::from_json(&json).unwrap();
    let restored = Store::restore(CartReducer::default(), snapshot);

    assert_eq!(restored.state(), store.state());
    assert_eq!(restored.listener_count(), 0);

    restored.dispatch(CartAction::Remove { id: ProductId(1) });
    assert_eq!(restored.state().cart, 1);
    assert_eq!(store.state().cart, 2);
}
