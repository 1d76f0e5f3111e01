//! Saved recipients (beneficiaries).
//!
//! The backend owns recipients. The client keeps whatever it fetched last and
//! makes no consistency promise beyond that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::{CurrencyCode, lookup_by_country_code};

/// Backend identifier of a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(String);

impl RecipientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: RecipientId,
    pub name: String,
    /// Two-letter country code.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
    pub bank_name: String,
    pub account_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipient {
    /// Currency to pre-select when sending to this recipient: the stored one,
    /// else the default for their country.
    pub fn preferred_currency(&self) -> CurrencyCode {
        self.currency.unwrap_or_else(|| {
            lookup_by_country_code(&self.country)
                .map(|row| row.currency)
                .unwrap_or(globepay_currencies::DEFAULT_CURRENCY)
        })
    }
}

/// Session-local cache of recipients. A new fetch replaces the whole list.
#[derive(Debug, Default, Clone)]
pub struct RecipientCache {
    recipients: Vec<Recipient>,
}

impl RecipientCache {
    pub fn replace(&mut self, recipients: Vec<Recipient>) {
        self.recipients = recipients;
    }

    pub fn upsert(&mut self, recipient: Recipient) {
        match self.recipients.iter_mut().find(|r| r.id == recipient.id) {
            Some(existing) => *existing = recipient,
            None => self.recipients.push(recipient),
        }
    }

    pub fn remove(&mut self, id: &RecipientId) -> Option<Recipient> {
        let idx = self.recipients.iter().position(|r| &r.id == id)?;
        Some(self.recipients.remove(idx))
    }

    pub fn get(&self, id: &RecipientId) -> Option<&Recipient> {
        self.recipients.iter().find(|r| &r.id == id)
    }

    pub fn all(&self) -> &[Recipient] {
        &self.recipients
    }
}
