//! Country to settlement currency directory.
//!
//! Used to pre-select a recipient's currency once their country is known.
//! The table is fixed at build time.

use serde::Serialize;

use crate::CurrencyCode;

/// Currency returned for countries the directory does not know.
pub const DEFAULT_CURRENCY: CurrencyCode = CurrencyCode::USD;

/// One row of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCurrency {
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub currency: CurrencyCode,
}

const fn entry(
    country_code: &'static str,
    country_name: &'static str,
    currency: CurrencyCode,
) -> CountryCurrency {
    CountryCurrency {
        country_code,
        country_name,
        currency,
    }
}

static COUNTRIES: &[CountryCurrency] = &[
    entry("US", "United States", CurrencyCode::USD),
    entry("GB", "United Kingdom", CurrencyCode::GBP),
    entry("EU", "European Union", CurrencyCode::EUR),
    entry("NG", "Nigeria", CurrencyCode::NGN),
    entry("CA", "Canada", CurrencyCode::CAD),
    entry("AU", "Australia", CurrencyCode::AUD),
    entry("JP", "Japan", CurrencyCode::JPY),
    entry("CN", "China", CurrencyCode::CNY),
    entry("IN", "India", CurrencyCode::INR),
    entry("BR", "Brazil", CurrencyCode::BRL),
    entry("MX", "Mexico", CurrencyCode::MXN),
    entry("ZA", "South Africa", CurrencyCode::ZAR),
    entry("KE", "Kenya", CurrencyCode::KES),
    entry("GH", "Ghana", CurrencyCode::GHS),
    entry("FR", "France", CurrencyCode::EUR),
    entry("DE", "Germany", CurrencyCode::EUR),
];

/// All directory rows, in display order.
pub fn countries() -> &'static [CountryCurrency] {
    COUNTRIES
}

/// Default currency for a country name. Never fails: unknown names map to
/// [`DEFAULT_CURRENCY`].
pub fn lookup_currency(country_name: &str) -> CurrencyCode {
    let wanted = country_name.trim();
    COUNTRIES
        .iter()
        .find(|c| c.country_name.eq_ignore_ascii_case(wanted))
        .map(|c| c.currency)
        .unwrap_or(DEFAULT_CURRENCY)
}

/// Row for a two-letter country code, if present.
pub fn lookup_by_country_code(code: &str) -> Option<&'static CountryCurrency> {
    let wanted = code.trim();
    COUNTRIES
        .iter()
        .find(|c| c.country_code.eq_ignore_ascii_case(wanted))
}
