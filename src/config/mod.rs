use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub pagseguro: ProviderCredentials,
    pub mercadopago: ProviderCredentials,
    pub stripe: ProviderCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Credentials and endpoint for one payment provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCredentials {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderCredentials {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn from_env(key_var: &str, url_var: &str, default_key: &str, default_url: &str) -> Self {
        Self {
            api_key: env::var(key_var).unwrap_or_else(|_| default_key.to_string()),
            base_url: env::var(url_var).unwrap_or_else(|_| default_url.to_string()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Every provider section falls back to sandbox placeholders so the demo
    /// runs without a `.env` file.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            pagseguro: ProviderCredentials::from_env(
                "PAGSEGURO_API_KEY",
                "PAGSEGURO_BASE_URL",
                "sandbox-pagseguro-key",
                "https://sandbox.api.pagseguro.com",
            ),
            mercadopago: ProviderCredentials::from_env(
                "MERCADOPAGO_ACCESS_TOKEN",
                "MERCADOPAGO_BASE_URL",
                "sandbox-mercadopago-token",
                "https://api.mercadopago.com",
            ),
            stripe: ProviderCredentials::from_env(
                "STRIPE_API_KEY",
                "STRIPE_BASE_URL",
                "sk_test_sandbox",
                "https://api.stripe.com",
            ),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, credentials) in [
            ("pagseguro", &self.pagseguro),
            ("mercadopago", &self.mercadopago),
            ("stripe", &self.stripe),
        ] {
            if credentials.api_key.is_empty() {
                return Err(AppError::Configuration(format!(
                    "API key for '{}' must not be empty",
                    name
                )));
            }
            if credentials.base_url.is_empty() {
                return Err(AppError::Configuration(format!(
                    "Base URL for '{}' must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }
}
