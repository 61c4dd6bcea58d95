//! Signup Form
//!
//! This example validates form submissions with the preset rule sets.
//!
//! Key concepts:
//! - All failing fields reported at once
//! - Missing fields reported separately from invalid ones
//! - Validators composed into custom rules
//!
//! Run with: cargo run --example signup_form

use pureform::form::{presets, Form, FormBuilder, FormRules};
use pureform::validator::{is_phone_number, lacks};
use tracing_subscriber::EnvFilter;

fn report(rules: &FormRules, form: &Form) {
    let errors = rules.errors(form);
    if errors.is_empty() {
        println!("  ✓ Form is valid\n");
        return;
    }
    for error in errors {
        println!("  ✗ {error}");
    }
    println!();
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Signup Form Example ===\n");

    let signup = presets::signup();
    println!("Signup fields: {}\n", signup.fields().join(", "));

    println!("Scenario 1: Valid signup");
    let form = Form::new()
        .with("first_name", "Grace")
        .with("last_name", "Hopper")
        .with("email", "grace@example.com")
        .with("birth_date", "1906-12-09")
        .with("password", "cobol59");
    report(&signup, &form);

    println!("Scenario 2: Everything wrong at once");
    let form = Form::new()
        .with("first_name", "G")
        .with("last_name", " ")
        .with("email", "grace@example")
        .with("birth_date", "2999-01-01")
        .with("password", "abc");
    report(&signup, &form);

    println!("Scenario 3: Payment with missing CVV");
    let form = Form::new().with("card_number", "4111-1111-1111-1111");
    report(&presets::payment(), &form);

    println!("Scenario 4: Custom rules");
    let rules = FormBuilder::new()
        .require("phone", is_phone_number, "Please input a valid phone number")
        .require(
            "message",
            |v| lacks(v, &["spam", "lottery"]),
            "Message looks like spam",
        )
        .build();
    let form = Form::new()
        .with("phone", "(03) 2345-6789")
        .with("message", "You won the lottery!");
    report(&rules, &form);

    println!("=== Example Complete ===");
}
