use super::super::models::{mask_card_number, LogRecord, ProviderFamily, TransactionId};
use super::provider_trait::{CardValidator, PaymentLogger, ProviderFactory, TransactionProcessor};
use crate::config::ProviderCredentials;
use crate::core::Result;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use std::sync::Arc;

/// PagSeguro API client
///
/// Network/auth context shared by every PagSeguro capability instance. The
/// stub never sends a request; the handle is the seam where the real
/// integration plugs in.
#[allow(dead_code)]
#[derive(Debug)]
pub struct PagSeguroClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl PagSeguroClient {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            http: Client::new(),
            api_key: credentials.api_key.clone(),
            base_url: credentials.base_url.clone(),
        }
    }

    /// Endpoint the live integration would call
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// PagSeguro card validator: any 16-character card number passes
pub struct PagSeguroValidator {
    // Held for the future remote validation call; the current rule is local.
    #[allow(dead_code)]
    client: Arc<PagSeguroClient>,
}

impl PagSeguroValidator {
    fn new(client: Arc<PagSeguroClient>) -> Self {
        Self { client }
    }
}

impl CardValidator for PagSeguroValidator {
    fn validate_card(&self, card_number: &str) -> bool {
        card_number.len() == 16
    }
}

/// PagSeguro transaction processor
pub struct PagSeguroProcessor {
    client: Arc<PagSeguroClient>,
}

impl PagSeguroProcessor {
    fn new(client: Arc<PagSeguroClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionProcessor for PagSeguroProcessor {
    async fn process_transaction(
        &self,
        amount: Decimal,
        card_number: &str,
    ) -> Result<TransactionId> {
        let reference = TransactionId::generate(ProviderFamily::PagSeguro);

        tracing::debug!(
            endpoint = %self.client.endpoint("charges"),
            "Sandbox charge, no request sent"
        );
        tracing::info!(
            provider = "pagseguro",
            amount = %amount,
            card = %mask_card_number(card_number),
            reference = %reference,
            "Transaction captured"
        );

        Ok(reference)
    }
}

/// PagSeguro payment logger
pub struct PagSeguroLogger {
    #[allow(dead_code)]
    client: Arc<PagSeguroClient>,
}

impl PagSeguroLogger {
    fn new(client: Arc<PagSeguroClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentLogger for PagSeguroLogger {
    async fn log(&self, message: &str) -> Result<LogRecord> {
        let record = LogRecord::new(ProviderFamily::PagSeguro, message);
        tracing::info!(provider = "pagseguro", message, "Payment event recorded");
        Ok(record)
    }
}

/// Factory for the PagSeguro capability set
///
/// Owns the family client and binds every capability it produces to it.
#[derive(Debug)]
pub struct PagSeguroFactory {
    client: Arc<PagSeguroClient>,
}

impl PagSeguroFactory {
    pub fn new(credentials: &ProviderCredentials) -> Self {
        Self {
            client: Arc::new(PagSeguroClient::new(credentials)),
        }
    }
}

impl ProviderFactory for PagSeguroFactory {
    fn family(&self) -> ProviderFamily {
        ProviderFamily::PagSeguro
    }

    fn validator(&self) -> Box<dyn CardValidator> {
        Box::new(PagSeguroValidator::new(Arc::clone(&self.client)))
    }

    fn processor(&self) -> Box<dyn TransactionProcessor> {
        Box::new(PagSeguroProcessor::new(Arc::clone(&self.client)))
    }

    fn logger(&self) -> Box<dyn PaymentLogger> {
        Box::new(PagSeguroLogger::new(Arc::clone(&self.client)))
    }
}
