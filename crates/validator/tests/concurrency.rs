//! Sharing engines, rule sets and rules across threads.

use std::sync::Arc;
use std::thread;

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<Engine>();
    assert_send_sync::<EngineConfig>();
    assert_send_sync::<RuleSet>();
    assert_send_sync::<ObjectReport>();
    assert_send_sync::<Fields<String>>();
    assert_send_sync::<BoxedRule>();
    assert_send_sync::<Predicate>();
    assert_send_sync::<CollectingSink>();
    assert_send_sync::<TracingSink>();

    assert_send_sync::<Required>();
    assert_send_sync::<MinLength>();
    assert_send_sync::<MaxLength>();
    assert_send_sync::<ArrayMinLen>();
    assert_send_sync::<ArrayMaxLen>();
    assert_send_sync::<Min>();
    assert_send_sync::<Max>();
    assert_send_sync::<Matches>();
    assert_send_sync::<Email>();
    assert_send_sync::<OneOf>();
    assert_send_sync::<EqualToProperty>();
    assert_send_sync::<WithMessage<Required>>();
    assert_send_sync::<Optional<Email>>();
}

#[test]
fn one_engine_validates_from_many_threads() {
    let sink = Arc::new(CollectingSink::new());
    let engine = Engine::builder().diagnostics(sink.clone()).build();
    let rules = RuleSet::new()
        .rule("username", required())
        .rule("username", min_length(3))
        .rule("email", email())
        .rule("tags", array_max_len(-1))
        .rule("confirmPassword", equal_to_property("password"));
    let form = json!({
        "username": "al",
        "email": "al@example",
        "tags": [],
        "password": "a",
        "confirmPassword": "b"
    });

    let expected = engine.validate_object(&form, &rules);
    assert_eq!(sink.take().len(), 1);

    const THREADS: usize = 8;
    let reports: Vec<ObjectReport> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| engine.validate_object(&form, &rules)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(!expected.is_valid);
    for report in &reports {
        assert_eq!(report, &expected);
    }
    assert_eq!(sink.len(), THREADS);
    assert!(sink.take().iter().all(|d| d.rule == "array_max_len"));
}
