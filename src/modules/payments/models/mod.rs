pub mod payment_outcome;

pub use payment_outcome::PaymentOutcome;
