use std::sync::Arc;

use super::super::models::PaymentOutcome;
use crate::core::Result;
use crate::modules::providers::models::{mask_card_number, ProviderFamily};
use crate::modules::providers::services::ProviderFactory;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Payment orchestration over one provider family
///
/// Depends only on the factory abstraction; the concrete family behind it is
/// fixed at construction. Validator, processor, and logger are all sourced
/// from that single factory, so the capabilities used within one call can
/// never mix families.
pub struct PaymentService {
    factory: Arc<dyn ProviderFactory>,
}

impl PaymentService {
    /// Create a new PaymentService bound to one provider factory
    pub fn new(factory: Arc<dyn ProviderFactory>) -> Self {
        Self { factory }
    }

    /// Family this service charges through
    pub fn provider(&self) -> ProviderFamily {
        self.factory.family()
    }

    /// Run one payment attempt: validate, process, log
    ///
    /// A card that fails validation short-circuits to `Rejected` with no
    /// transaction attempted and no log entry. A logging failure after a
    /// successful charge is reported but never rolls the charge back.
    pub async fn process_payment(
        &self,
        amount: Decimal,
        card_number: &str,
    ) -> Result<PaymentOutcome> {
        let provider = self.factory.family();

        let validator = self.factory.validator();
        if !validator.validate_card(card_number) {
            warn!(
                provider = %provider,
                card = %mask_card_number(card_number),
                "Card failed validation, payment rejected"
            );
            return Ok(PaymentOutcome::Rejected {
                reason: format!("card number failed {} validation", provider),
            });
        }

        let processor = self.factory.processor();
        let transaction_id = processor.process_transaction(amount, card_number).await?;

        info!(
            provider = %provider,
            transaction_id = %transaction_id,
            amount = %amount,
            "Payment approved"
        );

        let logger = self.factory.logger();
        let message = format!(
            "payment of {} approved with reference {}",
            amount, transaction_id
        );
        let log = match logger.log(&message).await {
            Ok(record) => Some(record),
            Err(error) => {
                // The charge already completed; surface the failure and move on.
                warn!(
                    provider = %provider,
                    transaction_id = %transaction_id,
                    error = %error,
                    "Transaction logging failed, charge stands"
                );
                None
            }
        };

        Ok(PaymentOutcome::Approved {
            transaction_id,
            log,
        })
    }
}
