//! Validating JSON payloads with fieldcheck-validator.
//!
//! Run: `RUST_LOG=debug cargo run -p fieldcheck-validator --example json_validation`

use std::sync::Arc;

use fieldcheck_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    field_level_validation();
    object_validation();
    collection_validation();
    misconfiguration();
}

/// One rule against one property.
fn field_level_validation() {
    println!("=== Field-Level Validation ===\n");

    let form = json!({"email": "not-an-email", "tags": ["a", "b", "c"]});

    let result = validate_field("email", &form, &form, &email());
    println!("email: {}", status(result.is_valid, &result.error_message));

    let result = validate_field("tags", &form, &form, &array_max_len(2));
    println!("tags:  {}", status(result.is_valid, &result.error_message));

    let result = validate_field("nickname", &form, &form, &max_length(20).optional());
    println!("nickname (optional, missing): {}", status(result.is_valid, &result.error_message));

    println!();
}

/// A rule set against a signup form.
fn object_validation() {
    println!("=== Object Validation ===\n");

    let rules = RuleSet::new()
        .rule("username", required())
        .rule("username", min_length(3))
        .rule("email", email())
        .rule("password", min_length(8))
        .rule("confirmPassword", equal_to_property("password"))
        .rule("plan", one_of(["free", "pro"]).with_message("Unknown plan ':value'."));

    let form = json!({
        "username": "al",
        "email": "al@example.com",
        "password": "hunter22",
        "confirmPassword": "hunter2",
        "plan": "gold"
    });

    let report = validate_object(&form, &rules);
    println!("valid: {}", report.is_valid);
    for (property, messages) in &report.errors {
        for message in messages {
            println!("  {property}: {message}");
        }
    }
    println!();
}

/// Indexed errors for a list of order lines.
fn collection_validation() {
    println!("=== Collection Validation ===\n");

    let lines = vec![
        json!({"sku": "A-1", "qty": 2}),
        json!({"sku": "", "qty": 1}),
        json!({"sku": "C-3", "qty": 0}),
    ];
    let rules = RuleSet::new()
        .rule("sku", required())
        .rule("qty", min(1.0));

    for entry in validate_collection(&lines, &rules) {
        println!("line {}: {:?}", entry.index, entry.errors);
    }
    println!();
}

/// Broken rule configuration is reported to the diagnostics sink.
fn misconfiguration() {
    println!("=== Misconfiguration ===\n");

    let sink = Arc::new(CollectingSink::new());
    let engine = Engine::builder().diagnostics(sink.clone()).build();
    let form = json!({"code": "abc"});

    let result = engine.validate_field("code", &form, &form, &matches("[unclosed"));
    println!("code: {}", status(result.is_valid, &result.error_message));
    for diagnostic in sink.take() {
        println!("  diagnostic: {} on {}: {}", diagnostic.rule, diagnostic.property, diagnostic.detail);
    }
}

fn status(is_valid: bool, message: &str) -> String {
    if is_valid {
        "PASS".to_owned()
    } else {
        format!("FAIL ({message})")
    }
}
