pub mod models;
pub mod services;

pub use models::PaymentOutcome;
pub use services::PaymentService;
