use super::super::models::{mask_card_number, LogRecord, ProviderFamily, TransactionId};
use super::provider_trait::{CardValidator, PaymentLogger, ProviderFactory, TransactionProcessor};
use crate::config::ProviderCredentials;
use crate::core::Result;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Stripe API client
///
/// Shared by every Stripe capability instance; carries the auth context the
/// live integration will use.
#[allow(dead_code)]
#[derive(Debug)]
pub struct StripeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl StripeClient {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            http: Client::new(),
            api_key: credentials.api_key.clone(),
            base_url: credentials.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Stripe card validator: 16 characters, leading '4'
pub struct StripeValidator {
    #[allow(dead_code)]
    client: Arc<StripeClient>,
}

impl StripeValidator {
    fn new(client: Arc<StripeClient>) -> Self {
        Self { client }
    }
}

impl CardValidator for StripeValidator {
    fn validate_card(&self, card_number: &str) -> bool {
        card_number.len() == 16 && card_number.starts_with('4')
    }
}

/// Stripe transaction processor
pub struct StripeProcessor {
    client: Arc<StripeClient>,
}

impl StripeProcessor {
    fn new(client: Arc<StripeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionProcessor for StripeProcessor {
    async fn process_transaction(
        &self,
        amount: Decimal,
        card_number: &str,
    ) -> Result<TransactionId> {
        let reference = TransactionId::generate(ProviderFamily::Stripe);

        tracing::debug!(
            endpoint = %self.client.endpoint("v1/charges"),
            "Sandbox charge, no request sent"
        );
        tracing::info!(
            provider = "stripe",
            amount = %amount,
            card = %mask_card_number(card_number),
            reference = %reference,
            "Transaction captured"
        );

        Ok(reference)
    }
}

/// Stripe payment logger
pub struct StripeLogger {
    #[allow(dead_code)]
    client: Arc<StripeClient>,
}

impl StripeLogger {
    fn new(client: Arc<StripeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentLogger for StripeLogger {
    async fn log(&self, message: &str) -> Result<LogRecord> {
        let record = LogRecord::new(ProviderFamily::Stripe, message);
        tracing::info!(provider = "stripe", message, "Payment event recorded");
        Ok(record)
    }
}

/// Factory for the Stripe capability set
#[derive(Debug)]
pub struct StripeFactory {
    client: Arc<StripeClient>,
}

impl StripeFactory {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            client: Arc::new(StripeClient::new(credentials)),
        }
    }
}

impl ProviderFactory for StripeFactory {
    fn family(&self) -> ProviderFamily {
        ProviderFamily::Stripe
    }

    fn validator(&self) -> Box<dyn CardValidator> {
        Box::new(StripeValidator::new(Arc::clone(&self.client)))
    }

    fn processor(&self) -> Box<dyn TransactionProcessor> {
        Box::new(StripeProcessor::new(Arc::clone(&self.client)))
    }

    fn logger(&self) -> Box<dyn PaymentLogger> {
        Box::new(StripeLogger::new(Arc::clone(&self.client)))
    }
}
