pub mod provider_family;
pub mod transaction;

pub use provider_family::ProviderFamily;
pub use transaction::{mask_card_number, LogRecord, TransactionId};
