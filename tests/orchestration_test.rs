use payagent::application::orchestrator::PaymentOrchestrator;
use payagent::application::scorer::{ScoringWeights, SelectionScorer};
use payagent::domain::method::PaymentMethod;
use payagent::domain::payment::PaymentResult;
use payagent::domain::profile::{CustomerProfile, DeviceClass};
use payagent::infrastructure::scripted::ScriptedProcessor;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

mod common;

#[tokio::test]
async fn test_fallback_success_reports_first_choice() {
    let shopify = ScriptedProcessor::failing(
        PaymentMethod::Shopify,
        "checkout creation failed",
        Some(PaymentMethod::Bnpl),
    );
    let bnpl = ScriptedProcessor::succeeding(PaymentMethod::Bnpl);
    let registry = common::succeeding_registry()
        .register(shopify.clone())
        .register(bnpl.clone());
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());

    let outcome = orchestrator
        .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
        .await;

    assert_eq!(outcome.selected_method, PaymentMethod::Shopify);
    match &outcome.result {
        PaymentResult::Success(success) => assert_eq!(success.method, PaymentMethod::Bnpl),
        other => panic!("expected bnpl success, got {other:?}"),
    }
    assert_eq!((shopify.calls(), bnpl.calls()), (1, 1));
}

#[tokio::test]
async fn test_failure_without_fallback_is_final() {
    let scorer = SelectionScorer::new(ScoringWeights {
        shopify_base: Decimal::ZERO,
        ..Default::default()
    });
    let crypto = ScriptedProcessor::failing(PaymentMethod::Crypto, "wallet service down", None);
    let others: Vec<ScriptedProcessor> = PaymentMethod::ALL
        .into_iter()
        .filter(|method| *method != PaymentMethod::Crypto)
        .map(ScriptedProcessor::succeeding)
        .collect();
    let registry = others
        .iter()
        .cloned()
        .fold(common::succeeding_registry(), |registry, processor| registry.register(processor))
        .register(crypto.clone());
    let orchestrator = PaymentOrchestrator::new(registry, scorer);

    let young_in_us = common::profile(Some(25), Some("US"), DeviceClass::Other);
    let outcome = orchestrator
        .process_payment(&common::order(dec!(50)), &young_in_us)
        .await;

    assert_eq!(outcome.selected_method, PaymentMethod::Crypto);
    match &outcome.result {
        PaymentResult::Failure(failure) => {
            assert_eq!(failure.error, "wallet service down");
            assert_eq!(failure.fallback, None);
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(crypto.calls(), 1);
    assert!(others.iter().all(|processor| processor.calls() == 0));
}

#[tokio::test]
async fn test_second_level_fallback_is_never_followed() {
    let shopify =
        ScriptedProcessor::failing(PaymentMethod::Shopify, "down", Some(PaymentMethod::Bnpl));
    let bnpl = ScriptedProcessor::failing(PaymentMethod::Bnpl, "declined", Some(PaymentMethod::Crypto));
    let crypto = ScriptedProcessor::succeeding(PaymentMethod::Crypto);
    let registry = common::succeeding_registry()
        .register(shopify.clone())
        .register(bnpl.clone())
        .register(crypto.clone());
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());

    let outcome = orchestrator
        .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
        .await;

    match &outcome.result {
        PaymentResult::Failure(failure) => assert_eq!(failure.error, "declined"),
        other => panic!("expected bnpl failure, got {other:?}"),
    }
    assert_eq!(outcome.selected_method, PaymentMethod::Shopify);
    assert_eq!((shopify.calls(), bnpl.calls(), crypto.calls()), (1, 1, 0));
}

#[tokio::test]
async fn test_fallback_pointing_back_runs_once() {
    let shopify =
        ScriptedProcessor::failing(PaymentMethod::Shopify, "down", Some(PaymentMethod::Bnpl));
    let bnpl =
        ScriptedProcessor::failing(PaymentMethod::Bnpl, "declined", Some(PaymentMethod::Shopify));
    let registry = common::succeeding_registry()
        .register(shopify.clone())
        .register(bnpl.clone());
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());

    orchestrator
        .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
        .await;

    assert_eq!((shopify.calls(), bnpl.calls()), (1, 1));
}

#[tokio::test]
async fn test_unregistered_fallback_becomes_generic_failure() {
    let shopify =
        ScriptedProcessor::failing(PaymentMethod::Shopify, "down", Some(PaymentMethod::Bnpl));
    let registry = payagent::application::registry::ProviderRegistry::new().register(shopify);
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());

    let outcome = orchestrator
        .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
        .await;

    match &outcome.result {
        PaymentResult::Failure(failure) => {
            assert_eq!(failure.error, "Payment processing failed");
            assert!(failure.details.as_deref().unwrap().contains("bnpl"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_every_outcome_is_stamped() {
    let failing = common::succeeding_registry().register(ScriptedProcessor::failing(
        PaymentMethod::Shopify,
        "down",
        None,
    ));
    for registry in [common::succeeding_registry(), failing] {
        let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());
        let before = chrono::Utc::now();
        let outcome = orchestrator
            .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
            .await;

        assert!(!outcome.transaction_id.is_nil());
        assert!(!outcome.transaction_id.to_string().is_empty());
        assert!(outcome.timestamp >= before);
    }
}

#[tokio::test]
async fn test_timed_out_fallback_is_final() {
    let shopify =
        ScriptedProcessor::failing(PaymentMethod::Shopify, "down", Some(PaymentMethod::Bnpl));
    let bnpl = ScriptedProcessor::succeeding(PaymentMethod::Bnpl)
        .with_delay(Duration::from_secs(5))
        .with_timeout_fallback(PaymentMethod::Crypto);
    let crypto = ScriptedProcessor::succeeding(PaymentMethod::Crypto);
    let registry = common::succeeding_registry()
        .register(shopify)
        .register(bnpl.clone())
        .register(crypto.clone());
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default())
        .with_invocation_timeout(Duration::from_millis(25));

    let outcome = orchestrator
        .process_payment(&common::order(dec!(50)), &CustomerProfile::default())
        .await;

    match &outcome.result {
        PaymentResult::Failure(failure) => {
            assert!(failure.error.contains("bnpl timed out"));
            assert_eq!(failure.fallback, Some(PaymentMethod::Crypto));
        }
        other => panic!("expected timeout failure, got {other:?}"),
    }
    assert_eq!(bnpl.calls(), 1);
    assert_eq!(crypto.calls(), 0);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let orchestrator = Arc::new(PaymentOrchestrator::new(
        common::succeeding_registry(),
        SelectionScorer::default(),
    ));

    let handles: Vec<_> = (0..16i64)
        .map(|i| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move {
                let order = common::order(Decimal::from(i * 20));
                orchestrator
                    .process_payment(&order, &CustomerProfile::default())
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(outcome.is_success());
        ids.insert(outcome.transaction_id);
    }
    assert_eq!(ids.len(), 16);
}

#[tokio::test]
async fn test_dropped_call_cancels_invocation() {
    let slow = ScriptedProcessor::succeeding(PaymentMethod::Shopify).with_delay(Duration::from_secs(5));
    let registry = common::succeeding_registry().register(slow.clone());
    let orchestrator = PaymentOrchestrator::new(registry, SelectionScorer::default());
    let order = common::order(dec!(50));
    let profile = CustomerProfile::default();

    let abandoned = tokio::time::timeout(
        Duration::from_millis(20),
        orchestrator.process_payment(&order, &profile),
    )
    .await;

    assert!(abandoned.is_err());
    assert_eq!(slow.calls(), 1);
}
