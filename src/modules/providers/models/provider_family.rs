use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported payment provider families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFamily {
    /// PagSeguro (Brazil)
    PagSeguro,
    /// MercadoPago (Latin America)
    MercadoPago,
    /// Stripe (global)
    Stripe,
}

impl ProviderFamily {
    /// Every family the crate ships an integration for
    pub const ALL: [ProviderFamily; 3] = [
        ProviderFamily::PagSeguro,
        ProviderFamily::MercadoPago,
        ProviderFamily::Stripe,
    ];

    /// Prefix stamped onto every transaction reference issued by this family
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            ProviderFamily::PagSeguro => "PAGSEG",
            ProviderFamily::MercadoPago => "MP",
            ProviderFamily::Stripe => "STRIPE",
        }
    }
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderFamily::PagSeguro => write!(f, "pagseguro"),
            ProviderFamily::MercadoPago => write!(f, "mercadopago"),
            ProviderFamily::Stripe => write!(f, "stripe"),
        }
    }
}

impl std::str::FromStr for ProviderFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pagseguro" => Ok(ProviderFamily::PagSeguro),
            "mercadopago" => Ok(ProviderFamily::MercadoPago),
            "stripe" => Ok(ProviderFamily::Stripe),
            _ => Err(format!("Unknown payment provider: {}", s)),
        }
    }
}

impl TryFrom<&str> for ProviderFamily {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}
