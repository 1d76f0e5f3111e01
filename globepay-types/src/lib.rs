//! # Globepay Types
//!
//! Domain types and port traits for the Globepay money-transfer client.
//! This crate has no IO dependencies: only data structures, the quote
//! calculator and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Amounts, quotes, transfers, recipients, preferences, session
//! - `ports/` - Traits that adapters implement (rate gateway, session storage)
//! - `dto/` - Request and response bodies exchanged with the backend
//! - `error/` - Domain and quote error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AccountSummary, Amount, AuthSession, FeeTier, PreferencesUpdate, Quote, QuoteOutcome,
    RateSource, Recipient, RecipientCache, RecipientId, Transaction, TransactionStatus,
    TransactionType, Transfer, TransferId, TransferStatus, User, UserPreferences, calculate_fee, compute_quote,
};
pub use dto::*;
pub use error::{DomainError, QuoteError};
pub use globepay_currencies::{CurrencyCode, lookup_currency};
pub use ports::{GatewayError, RateGateway, RateQuote, SessionStorage, StorageError};
