pub mod mercadopago;
pub mod pagseguro;
pub mod provider_service;
pub mod provider_trait;
pub mod stripe;

pub use mercadopago::MercadoPagoFactory;
pub use pagseguro::PagSeguroFactory;
pub use provider_service::ProviderService;
pub use provider_trait::{CardValidator, PaymentLogger, ProviderFactory, TransactionProcessor};
pub use stripe::StripeFactory;
