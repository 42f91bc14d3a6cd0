use super::super::models::{LogRecord, ProviderFamily, TransactionId};
use crate::core::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Card validation capability
///
/// Fails open to `false` for malformed input; never errors. Validation rules
/// are family-specific toy checks standing in for real gateway validation.
pub trait CardValidator: Send + Sync {
    fn validate_card(&self, card_number: &str) -> bool;
}

/// Transaction processing capability
///
/// Assumes validation already passed; does not re-validate.
#[async_trait]
pub trait TransactionProcessor: Send + Sync {
    /// Charge the card and return the provider's transaction reference
    async fn process_transaction(&self, amount: Decimal, card_number: &str)
        -> Result<TransactionId>;
}

/// Transaction logging capability
///
/// Returns the structured record it captured. A logging failure must never
/// invalidate a completed charge.
#[async_trait]
pub trait PaymentLogger: Send + Sync {
    async fn log(&self, message: &str) -> Result<LogRecord>;
}

/// Factory producing one consistent set of capabilities
///
/// Every capability instance produced by one factory is bound to the same
/// family client, so a validator, processor, and logger sourced from a single
/// factory can never mix families. Adding a family means adding one factory
/// implementation plus its three capability implementations; consumers are
/// untouched.
pub trait ProviderFactory: Send + Sync + std::fmt::Debug {
    /// Family this factory builds capabilities for
    fn family(&self) -> ProviderFamily;

    fn validator(&self) -> Box<dyn CardValidator>;

    fn processor(&self) -> Box<dyn TransactionProcessor>;

    fn logger(&self) -> Box<dyn PaymentLogger>;
}
