//! Transfer quote calculation.
//!
//! A quote is an estimate of the fee and the amount the recipient gets for a
//! prospective transfer. Fees are tiered on the source amount and charged in
//! the source currency before conversion:
//!
//! | Source amount        | Fee            |
//! |----------------------|----------------|
//! | `<= 100`             | 2.99 flat      |
//! | `> 100` and `<= 1000`| 1% of amount   |
//! | `> 1000`             | 0.5% of amount |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use globepay_currencies::CurrencyCode;

use super::money::Amount;
use crate::error::QuoteError;

pub const FLAT_FEE: f64 = 2.99;
pub const FLAT_FEE_CEILING: f64 = 100.0;
pub const STANDARD_FEE_CEILING: f64 = 1000.0;
pub const STANDARD_FEE_RATE: f64 = 0.01;
pub const REDUCED_FEE_RATE: f64 = 0.005;

/// Fee bracket a source amount falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeTier {
    /// Fixed [`FLAT_FEE`].
    Flat,
    /// [`STANDARD_FEE_RATE`] of the amount.
    Standard,
    /// [`REDUCED_FEE_RATE`] of the amount.
    Reduced,
}

impl FeeTier {
    /// Boundaries belong to the lower tier: exactly 100 is `Flat`, exactly
    /// 1000 is `Standard`.
    pub fn for_amount(amount: f64) -> Self {
        if amount <= FLAT_FEE_CEILING {
            FeeTier::Flat
        } else if amount <= STANDARD_FEE_CEILING {
            FeeTier::Standard
        } else {
            FeeTier::Reduced
        }
    }

    pub fn fee(&self, amount: f64) -> f64 {
        match self {
            FeeTier::Flat => FLAT_FEE,
            FeeTier::Standard => amount * STANDARD_FEE_RATE,
            FeeTier::Reduced => amount * REDUCED_FEE_RATE,
        }
    }
}

/// Fee in source currency for `amount`. A non-finite result is clamped to 0.
pub fn calculate_fee(amount: f64) -> f64 {
    let fee = FeeTier::for_amount(amount).fee(amount);
    if fee.is_finite() {
        fee
    } else {
        tracing::warn!(amount, "fee computation produced a non-finite value, using 0");
        0.0
    }
}

/// Where the rate used for a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateSource {
    /// Returned by the rate service.
    Live { timestamp: Option<DateTime<Utc>> },
    /// Taken from the static fallback table; the quote is approximate.
    Fallback,
}

impl RateSource {
    pub fn is_approximate(&self) -> bool {
        matches!(self, RateSource::Fallback)
    }
}

/// Computed estimate for a prospective transfer. Not a committed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    source_amount: Amount,
    dest_currency: CurrencyCode,
    rate: f64,
    fee: Amount,
    converted_amount: f64,
}

impl Quote {
    pub fn source_amount(&self) -> Amount {
        self.source_amount
    }

    pub fn dest_currency(&self) -> CurrencyCode {
        self.dest_currency
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn fee(&self) -> Amount {
        self.fee
    }

    pub fn fee_tier(&self) -> FeeTier {
        FeeTier::for_amount(self.source_amount.value())
    }

    /// Unrounded amount the recipient receives, in the destination currency.
    pub fn converted_amount(&self) -> f64 {
        self.converted_amount
    }

    /// Portion of the source amount left to convert once the fee is taken.
    pub fn net_amount(&self) -> f64 {
        (self.source_amount.value() - self.fee.value()).max(0.0)
    }

    /// Converted amount rounded to the destination currency's precision.
    pub fn display_converted(&self) -> String {
        self.dest_currency.format_amount(self.converted_amount)
    }
}

/// Quote together with the provenance of its rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteOutcome {
    pub quote: Quote,
    pub rate_source: RateSource,
}

impl QuoteOutcome {
    pub fn is_approximate(&self) -> bool {
        self.rate_source.is_approximate()
    }
}

/// Computes fee and converted amount for a transfer of `source_amount`.
///
/// `converted_amount = (source_amount - fee) * rate`. The result is always
/// finite and non-negative: a non-finite product is clamped to 0 and logged,
/// and amounts smaller than the flat fee convert to 0.
pub fn compute_quote(
    source_amount: f64,
    source_currency: CurrencyCode,
    dest_currency: CurrencyCode,
    rate: f64,
) -> Result<Quote, QuoteError> {
    if !source_amount.is_finite() || source_amount <= 0.0 {
        return Err(QuoteError::InvalidAmount(source_amount));
    }
    if !rate.is_finite() || rate <= 0.0 {
        return Err(QuoteError::InvalidRate(rate));
    }

    let fee = calculate_fee(source_amount);
    let net = source_amount - fee;

    let converted_amount = if net <= 0.0 {
        tracing::debug!(source_amount, fee, "amount does not cover the fee");
        0.0
    } else {
        let converted = net * rate;
        if converted.is_finite() {
            converted
        } else {
            tracing::warn!(
                source_amount,
                rate,
                "conversion produced a non-finite value, using 0"
            );
            0.0
        }
    };

    Ok(Quote {
        source_amount: Amount::new(source_amount, source_currency)?,
        dest_currency,
        rate,
        fee: Amount::new(fee, source_currency)?,
        converted_amount,
    })
}
