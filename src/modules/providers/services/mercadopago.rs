use super::super::models::{mask_card_number, LogRecord, ProviderFamily, TransactionId};
use super::provider_trait::{CardValidator, PaymentLogger, ProviderFactory, TransactionProcessor};
use crate::config::ProviderCredentials;
use crate::core::Result;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::sync::Arc;

/// MercadoPago API client, shared by the family's capability instances
#[allow(dead_code)]
#[derive(Debug)]
pub struct MercadoPagoClient {
    http: Client,
    access_token: String,
    base_url: String,
}

impl MercadoPagoClient {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            http: Client::new(),
            access_token: credentials.api_key.clone(),
            base_url: credentials.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// MercadoPago card validator: 16 characters, leading '5'
pub struct MercadoPagoValidator {
    #[allow(dead_code)]
    client: Arc<MercadoPagoClient>,
}

impl MercadoPagoValidator {
    fn new(client: Arc<MercadoPagoClient>) -> Self {
        Self { client }
    }
}

impl CardValidator for MercadoPagoValidator {
    fn validate_card(&self, card_number: &str) -> bool {
        card_number.len() == 16 && card_number.starts_with('5')
    }
}

pub struct MercadoPagoProcessor {
    client: Arc<MercadoPagoClient>,
}

impl MercadoPagoProcessor {
    fn new(client: Arc<MercadoPagoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionProcessor for MercadoPagoProcessor {
    async fn process_transaction(
        &self,
        amount: Decimal,
        card_number: &str,
    ) -> Result<TransactionId> {
        let reference = TransactionId::generate(ProviderFamily::MercadoPago);

        tracing::debug!(
            endpoint = %self.client.endpoint("v1/payments"),
            "Sandbox charge, no request sent"
        );
        tracing::info!(
            provider = "mercadopago",
            amount = %amount,
            card = %mask_card_number(card_number),
            reference = %reference,
            "Transaction captured"
        );

        Ok(reference)
    }
}

pub struct MercadoPagoLogger {
    #[allow(dead_code)]
    client: Arc<MercadoPagoClient>,
}

impl MercadoPagoLogger {
    fn new(client: Arc<MercadoPagoClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentLogger for MercadoPagoLogger {
    async fn log(&self, message: &str) -> Result<LogRecord> {
        let record = LogRecord::new(ProviderFamily::MercadoPago, message);
        tracing::info!(provider = "mercadopago", message, "Payment event recorded");
        Ok(record)
    }
}

/// Factory for the MercadoPago capability set
#[derive(Debug)]
pub struct MercadoPagoFactory {
    client: Arc<MercadoPagoClient>,
}

impl MercadoPagoFactory {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            client: Arc::new(MercadoPagoClient::new(credentials)),
        }
    }
}

impl ProviderFactory for MercadoPagoFactory {
    fn family(&self) -> ProviderFamily {
        ProviderFamily::MercadoPago
    }

    fn validator(&self) -> Box<dyn CardValidator> {
        Box::new(MercadoPagoValidator::new(Arc::clone(&self.client)))
    }

    fn processor(&self) -> Box<dyn TransactionProcessor> {
        Box::new(MercadoPagoProcessor::new(Arc::clone(&self.client)))
    }

    fn logger(&self) -> Box<dyn PaymentLogger> {
        Box::new(MercadoPagoLogger::new(Arc::clone(&self.client)))
    }
}
