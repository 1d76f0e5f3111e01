//! Data Transfer Objects (DTOs) for backend requests and responses.

use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

use crate::domain::{AuthSession, Transaction, Transfer, User};
use crate::error::QuoteError;

// ─────────────────────────────────────────────────────────────────────────────
// Auth DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Body returned by login, register and refresh.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: User,
}

impl From<AuthResponse> for AuthSession {
    fn from(resp: AuthResponse) -> Self {
        AuthSession {
            token: resp.token,
            refresh_token: resp.refresh_token,
            user: resp.user,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Request to open a wallet in another currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub currency: CurrencyCode,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transfer DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub recipient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    /// Two-letter country code.
    pub recipient_country: String,
    pub recipient_bank_name: String,
    pub recipient_account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_swift_code: Option<String>,
    pub source_currency: CurrencyCode,
    pub dest_currency: CurrencyCode,
    pub source_amount: f64,
    pub purpose: String,
}

/// Paging block the backend attaches to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

/// Total for a list response: top-level `total` wins, then
/// `pagination.total`, then the number of items received.
fn page_total(total: Option<u64>, pagination: Option<Pagination>, received: usize) -> u64 {
    total
        .or(pagination.map(|p| p.total))
        .unwrap_or(received as u64)
}

/// One page of the transfer history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawTransferPage")]
pub struct TransferPage {
    pub transfers: Vec<Transfer>,
    pub total: u64,
}

#[derive(Deserialize)]
struct RawTransferPage {
    #[serde(default)]
    transfers: Vec<Transfer>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

impl From<RawTransferPage> for TransferPage {
    fn from(raw: RawTransferPage) -> Self {
        Self {
            total: page_total(raw.total, raw.pagination, raw.transfers.len()),
            transfers: raw.transfers,
        }
    }
}

/// One page of the wallet transaction history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawTransactionPage")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: u64,
}

#[derive(Deserialize)]
struct RawTransactionPage {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

impl From<RawTransactionPage> for TransactionPage {
    fn from(raw: RawTransactionPage) -> Self {
        Self {
            total: page_total(raw.total, raw.pagination, raw.transactions.len()),
            transactions: raw.transactions,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recipient DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Create or replace a saved recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRequest {
    pub name: String,
    pub country: String,
    pub bank_name: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Raw quote input as collected from a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

/// Quote input that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidQuoteRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl QuoteRequest {
    pub fn new(amount: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Checks the amount and parses both currency codes.
    pub fn validate(&self) -> Result<ValidQuoteRequest, QuoteError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(QuoteError::InvalidAmount(self.amount));
        }
        if self.from.trim().is_empty() {
            return Err(QuoteError::MissingCurrency("source"));
        }
        if self.to.trim().is_empty() {
            return Err(QuoteError::MissingCurrency("destination"));
        }
        Ok(ValidQuoteRequest {
            amount: self.amount,
            from: self.from.parse()?,
            to: self.to.parse()?,
        })
    }
}
