// Integration test for the complete payment flow
//
// Tests end-to-end outcome semantics:
// 1. Build a service over one provider family
// 2. Process a payment
// 3. Verify the outcome variant, reference prefix, and captured log record

use std::sync::Arc;

use paybridge::config::ProviderCredentials;
use paybridge::payments::{PaymentOutcome, PaymentService};
use paybridge::providers::{
    MercadoPagoFactory, PagSeguroFactory, ProviderFactory, ProviderFamily, StripeFactory,
};
use rust_decimal_macros::dec;

fn sandbox_credentials() -> ProviderCredentials {
    ProviderCredentials::new("test-key", "https://sandbox.example.test")
}

fn service_for(family: ProviderFamily) -> PaymentService {
    let credentials = sandbox_credentials();
    let factory: Arc<dyn ProviderFactory> = match family {
        ProviderFamily::PagSeguro => Arc::new(PagSeguroFactory::new(&credentials)),
        ProviderFamily::MercadoPago => Arc::new(MercadoPagoFactory::new(&credentials)),
        ProviderFamily::Stripe => Arc::new(StripeFactory::new(&credentials)),
    };
    PaymentService::new(factory)
}

#[tokio::test]
async fn test_stripe_rejects_sixteen_digit_card_without_four_prefix() {
    let service = service_for(ProviderFamily::Stripe);

    let outcome = service
        .process_payment(dec!(250.00), "1234567890123456")
        .await
        .expect("rejection is an outcome, not an error");

    // No transaction attempted, no log entry captured
    assert!(!outcome.is_approved());
    assert!(outcome.transaction_id().is_none());
    assert!(outcome.log().is_none());

    match outcome {
        PaymentOutcome::Rejected { reason } => {
            assert!(reason.contains("stripe"), "reason was: {}", reason)
        }
        PaymentOutcome::Approved { .. } => panic!("card must not be approved"),
    }
}

#[tokio::test]
async fn test_stripe_approves_four_prefixed_card() {
    let service = service_for(ProviderFamily::Stripe);

    let outcome = service
        .process_payment(dec!(250.00), "4234567890123456")
        .await
        .unwrap();

    let transaction_id = outcome.transaction_id().expect("payment should be approved");
    let (prefix, token) = transaction_id.as_str().split_once('-').unwrap();
    assert_eq!(prefix, "STRIPE");
    assert_eq!(token.len(), 8);

    // Exactly one log record, stamped by the same family, embedding the reference
    let log = outcome.log().expect("logging should succeed");
    assert_eq!(log.provider, ProviderFamily::Stripe);
    assert!(log.message.contains(transaction_id.as_str()));
}

#[tokio::test]
async fn test_mercadopago_approves_five_prefixed_card() {
    let service = service_for(ProviderFamily::MercadoPago);

    let outcome = service
        .process_payment(dec!(80.00), "5234567890123456")
        .await
        .unwrap();

    let transaction_id = outcome.transaction_id().expect("payment should be approved");
    assert!(transaction_id.as_str().starts_with("MP-"));
}

#[tokio::test]
async fn test_mercadopago_rejects_four_prefixed_card() {
    let service = service_for(ProviderFamily::MercadoPago);

    let outcome = service
        .process_payment(dec!(80.00), "4234567890123456")
        .await
        .unwrap();

    assert!(!outcome.is_approved());
}

#[tokio::test]
async fn test_pagseguro_accepts_any_sixteen_char_card() {
    let service = service_for(ProviderFamily::PagSeguro);

    let outcome = service
        .process_payment(dec!(19.90), "9876543210987654")
        .await
        .unwrap();

    let transaction_id = outcome.transaction_id().expect("payment should be approved");
    assert!(transaction_id.as_str().starts_with("PAGSEG-"));
}

#[tokio::test]
async fn test_short_card_rejected_by_every_family() {
    for family in ProviderFamily::ALL {
        let outcome = service_for(family)
            .process_payment(dec!(10.00), "4111")
            .await
            .unwrap();
        assert!(!outcome.is_approved(), "{} must reject a short card", family);
    }
}

#[tokio::test]
async fn test_capabilities_within_one_call_share_a_family() {
    // The service sources validator, processor, and logger from its one
    // factory, so the issued reference and the captured log record must
    // always name the same family.
    let cards = [
        (ProviderFamily::PagSeguro, "1111222233334444"),
        (ProviderFamily::MercadoPago, "5111222233334444"),
        (ProviderFamily::Stripe, "4111222233334444"),
    ];

    for (family, card) in cards {
        let service = service_for(family);
        assert_eq!(service.provider(), family);

        let outcome = service.process_payment(dec!(42.00), card).await.unwrap();

        let transaction_id = outcome.transaction_id().expect("payment should be approved");
        assert!(transaction_id.belongs_to(family));

        let log = outcome.log().expect("logging should succeed");
        assert_eq!(log.provider, family);
    }
}
