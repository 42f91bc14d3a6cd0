// Integration test for provider selection
//
// Tests that family names resolve to their factory, and that unknown names
// fail at selection time, before any capability instance exists.

use paybridge::config::Config;
use paybridge::core::AppError;
use paybridge::payments::PaymentService;
use paybridge::providers::{ProviderFamily, ProviderService};
use rust_decimal_macros::dec;

fn registry() -> ProviderService {
    let config = Config::from_env().expect("sandbox config should load");
    ProviderService::from_config(&config)
}

#[test]
fn test_every_shipped_family_is_registered() {
    let providers = registry();
    let families = providers.families();
    assert_eq!(families.len(), 3);
    for family in ProviderFamily::ALL {
        assert!(families.contains(&family));
    }
}

#[test]
fn test_unsupported_provider_fails_at_selection() {
    let providers = registry();

    let err = providers.select("Nubank").unwrap_err();
    match err {
        AppError::UnsupportedProvider(name) => assert_eq!(name, "Nubank"),
        other => panic!("expected UnsupportedProvider, got: {}", other),
    }
}

#[test]
fn test_selection_never_defaults_silently() {
    let providers = registry();
    assert!(providers.select("").is_err());
    assert!(providers.select("visa").is_err());
    assert!(providers.select("stripe ").is_err());
}

#[test]
fn test_selection_accepts_display_names_case_insensitively() {
    let providers = registry();

    for (name, family) in [
        ("Stripe", ProviderFamily::Stripe),
        ("PagSeguro", ProviderFamily::PagSeguro),
        ("MercadoPago", ProviderFamily::MercadoPago),
        ("STRIPE", ProviderFamily::Stripe),
    ] {
        let factory = providers.select(name).unwrap();
        assert_eq!(factory.family(), family, "name: {}", name);
    }
}

#[tokio::test]
async fn test_selected_factory_drives_the_whole_flow() {
    let providers = registry();

    let factory = providers.select("mercadopago").unwrap();
    let service = PaymentService::new(factory);

    let outcome = service
        .process_payment(dec!(150.00), "5500440033002200")
        .await
        .unwrap();

    let transaction_id = outcome.transaction_id().expect("payment should be approved");
    assert!(transaction_id.belongs_to(ProviderFamily::MercadoPago));
}
