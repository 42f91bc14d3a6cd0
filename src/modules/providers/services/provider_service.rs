use std::collections::HashMap;
use std::sync::Arc;

use super::super::models::ProviderFamily;
use super::mercadopago::MercadoPagoFactory;
use super::pagseguro::PagSeguroFactory;
use super::provider_trait::ProviderFactory;
use super::stripe::StripeFactory;
use crate::config::Config;
use crate::core::{AppError, Result};

/// Registry mapping provider families to their capability factories
///
/// The single place the supported families are enumerated. Selection by name
/// fails fast for unknown identifiers and never falls back to a default
/// family.
pub struct ProviderService {
    factories: HashMap<ProviderFamily, Arc<dyn ProviderFactory>>,
}

impl ProviderService {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Build the registry with every supported family wired to its credentials
    pub fn from_config(config: &Config) -> Self {
        let mut service = Self::new();
        service.register(Arc::new(PagSeguroFactory::new(&config.pagseguro)));
        service.register(Arc::new(MercadoPagoFactory::new(&config.mercadopago)));
        service.register(Arc::new(StripeFactory::new(&config.stripe)));
        service
    }

    /// Register a factory under its own family
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        self.factories.insert(factory.family(), factory);
    }

    /// Resolve a provider name to its factory
    ///
    /// Accepts the family names case-insensitively ("Stripe", "PagSeguro",
    /// "MercadoPago"). Unknown names fail before any capability exists.
    pub fn select(&self, name: &str) -> Result<Arc<dyn ProviderFactory>> {
        let family: ProviderFamily = name
            .parse()
            .map_err(|_| AppError::UnsupportedProvider(name.to_string()))?;

        self.factories
            .get(&family)
            .cloned()
            .ok_or_else(|| AppError::UnsupportedProvider(name.to_string()))
    }

    /// List the registered families
    pub fn families(&self) -> Vec<ProviderFamily> {
        let mut families: Vec<ProviderFamily> = self.factories.keys().copied().collect();
        families.sort_by_key(|family| family.reference_prefix());
        families
    }
}

impl Default for ProviderService {
    fn default() -> Self {
        Self::new()
    }
}
