use super::provider_family::ProviderFamily;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque transaction reference issued by a provider family
///
/// Format: `{FAMILY_PREFIX}-{8 hex chars}`, e.g. `STRIPE-a1b2c3d4`.
/// Returned synchronously to the caller and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh reference for the given family
    pub fn generate(family: ProviderFamily) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", family.reference_prefix(), &token[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference was issued by the given family
    pub fn belongs_to(&self, family: ProviderFamily) -> bool {
        self.0
            .strip_prefix(family.reference_prefix())
            .is_some_and(|rest| rest.starts_with('-'))
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured record captured by a provider's logger
///
/// Returned to the caller so the outcome of a payment is verifiable without
/// scraping console output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Family whose logger captured the record
    pub provider: ProviderFamily,

    /// Free-form message, embeds the transaction reference
    pub message: String,

    /// Capture timestamp
    pub logged_at: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(provider: ProviderFamily, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
            logged_at: Utc::now(),
        }
    }
}

/// Mask a card number for log fields, keeping only the last four characters
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", suffix)
}
