//! Ready-made rule sets for the common sign-up, billing, payment and
//! contact forms.

use crate::core::Guard;
use crate::form::builder::FormBuilder;
use crate::form::rules::FormRules;
use crate::validator::{
    is_before_today, is_between, is_credit_card, is_date, is_email_address, is_empty,
    is_integer_prefix, is_of_length,
};

fn present() -> Guard<str> {
    Guard::new(|v: &str| !is_empty(Some(v)))
}

fn name() -> Guard<str> {
    present().and(Guard::new(|v: &str| is_of_length(v, 2)))
}

fn email() -> Guard<str> {
    present().and(Guard::new(is_email_address))
}

fn in_the_past() -> Guard<str> {
    Guard::new(|v: &str| matches!(is_before_today(v), Ok(true)))
}

fn password() -> Guard<str> {
    present().and(Guard::new(|v: &str| is_between(v.chars().count(), 6, 8)))
}

/// Sign-up: names, email, birth date in the past, 6-8 character password.
pub fn signup() -> FormRules {
    FormBuilder::new()
        .require_guard("first_name", name(), "Please enter a valid first name")
        .require_guard("last_name", name(), "Please enter a valid last name")
        .require_guard("email", email(), "Doesn't look like a valid email.")
        .require_guard("birth_date", in_the_past(), "Looks like you weren't born yet.")
        .require_guard(
            "password",
            password(),
            "Password needs to be 6-8 characters long.",
        )
        .build()
}

/// Billing address: every line filled in, zip starting with an integer.
pub fn billing_address() -> FormRules {
    FormBuilder::new()
        .require_present("address", "Please enter a valid address")
        .require_present("city", "Please enter a valid city.")
        .require_present("state", "Please enter a valid state.")
        .require("zip", is_integer_prefix, "Integers only !")
        .require_present("country", "Please enter a valid country.")
        .build()
}

/// Card payment: card number and a 3-4 character CVV.
pub fn payment() -> FormRules {
    FormBuilder::new()
        .require("card_number", is_credit_card, "Please insert a valid CC number.")
        .require(
            "cvv",
            |v| is_between(v.chars().count(), 3, 4),
            "Please insert a valid CVV.",
        )
        .build()
}

/// Contact request: a valid date that is not in the past, name and email.
pub fn contact() -> FormRules {
    FormBuilder::new()
        .require("date", |v| is_date(v), "Please input a valid date.")
        // Unparseable dates are reported by the rule above.
        .require_guard("date", in_the_past().negate(), "Please input a date after today.")
        .require_guard("name", name(), "Please input a valid name")
        .require("email", is_email_address, "Please input a valid email")
        .build()
}
