//! Domain models for the Globepay client.

pub mod account;
pub mod money;
pub mod preferences;
pub mod quote;
pub mod recipient;
pub mod session;
pub mod transaction;
pub mod transfer;
pub mod validation;

pub use account::{AccountStatus, AccountSummary, User};
pub use money::Amount;
pub use preferences::{NotificationChannels, PreferencesUpdate, UserPreferences};
pub use quote::{FeeTier, Quote, QuoteOutcome, RateSource, calculate_fee, compute_quote};
pub use recipient::{Recipient, RecipientCache, RecipientId};
pub use session::AuthSession;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use transfer::{Transfer, TransferId, TransferStatus};
