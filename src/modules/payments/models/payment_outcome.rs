use crate::modules::providers::models::{LogRecord, TransactionId};
use serde::{Deserialize, Serialize};

/// Outcome of one payment attempt
///
/// A declined card is a normal outcome, not an error; only configuration and
/// provider faults surface as `AppError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaymentOutcome {
    /// Card validated and the charge went through
    Approved {
        /// Reference issued by the provider's processor
        transaction_id: TransactionId,

        /// Record captured by the provider's logger; `None` when logging
        /// failed after the charge completed
        log: Option<LogRecord>,
    },

    /// Card failed the provider's validation; no charge was attempted
    Rejected { reason: String },
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    /// Transaction reference, if the payment was approved
    pub fn transaction_id(&self) -> Option<&TransactionId> {
        match self {
            PaymentOutcome::Approved { transaction_id, .. } => Some(transaction_id),
            PaymentOutcome::Rejected { .. } => None,
        }
    }

    /// Captured log record, if the payment was approved and logging succeeded
    pub fn log(&self) -> Option<&LogRecord> {
        match self {
            PaymentOutcome::Approved { log, .. } => log.as_ref(),
            PaymentOutcome::Rejected { .. } => None,
        }
    }
}
