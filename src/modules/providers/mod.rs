pub mod models;
pub mod services;

pub use models::{LogRecord, ProviderFamily, TransactionId};
pub use services::{
    CardValidator, MercadoPagoFactory, PagSeguroFactory, PaymentLogger, ProviderFactory,
    ProviderService, StripeFactory, TransactionProcessor,
};
