//! Currency catalogue for the Globepay client.
//!
//! The set of currencies the client can quote in is closed and defined
//! declaratively with the `define_currencies!` macro, which generates the
//! `CurrencyCode` enum together with its metadata lookups and parsing.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation below:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     SEK => ("SEK", "kr", "Swedish Krona", 2),
//! }
//! ```
//!
//! # Example
//! ```
//! use globepay_currencies::{CurrencyCode, fallback_rate, lookup_currency};
//!
//! let currency = lookup_currency("Germany");
//! assert_eq!(currency, CurrencyCode::EUR);
//!
//! let rate = fallback_rate(CurrencyCode::USD, CurrencyCode::EUR);
//! assert_eq!(rate, 0.85);
//! ```

pub mod directory;
pub mod fallback;

pub use directory::{
    CountryCurrency, DEFAULT_CURRENCY, countries, lookup_by_country_code, lookup_currency,
};
pub use fallback::{fallback_rate, has_fallback_rate};

/// Returned when a string does not name a supported currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines all currencies and the CurrencyCode enum
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the supported currencies.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "SYMBOL", "Display name", decimal_places),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $display:literal, $decimals:expr)
        ),* $(,)?
    ) => {
        /// ISO-style code of a currency the client supports.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            /// Number of decimal places shown when formatting amounts.
            pub fn decimal_places(&self) -> u8 {
                match self {
                    $(CurrencyCode::$name => $decimals),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", "US Dollar", 2),
    EUR => ("EUR", "€", "Euro", 2),
    GBP => ("GBP", "£", "British Pound", 2),
    JPY => ("JPY", "¥", "Japanese Yen", 0),
    CAD => ("CAD", "CA$", "Canadian Dollar", 2),
    AUD => ("AUD", "A$", "Australian Dollar", 2),
    CHF => ("CHF", "CHF", "Swiss Franc", 2),
    CNY => ("CNY", "CN¥", "Chinese Yuan", 2),
    INR => ("INR", "₹", "Indian Rupee", 2),
    NGN => ("NGN", "₦", "Nigerian Naira", 2),
    BRL => ("BRL", "R$", "Brazilian Real", 2),
    MXN => ("MXN", "MX$", "Mexican Peso", 2),
    ZAR => ("ZAR", "R", "South African Rand", 2),
    KES => ("KES", "KSh", "Kenyan Shilling", 2),
    GHS => ("GHS", "GH₵", "Ghanaian Cedi", 2),
}

impl CurrencyCode {
    /// Formats `value` with this currency's symbol and display precision.
    pub fn format_amount(&self, value: f64) -> String {
        format!(
            "{}{:.*}",
            self.symbol(),
            self.decimal_places() as usize,
            value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" ngn ".parse::<CurrencyCode>().unwrap(), CurrencyCode::NGN);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = "XYZ".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, UnknownCurrency("XYZ".to_string()));
        assert!("".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::GBP.to_string(), "GBP");
    }

    #[test]
    fn test_currency_code_all() {
        assert_eq!(CurrencyCode::all().len(), 15);
        for code in CurrencyCode::all() {
            assert_eq!(code.code().len(), 3);
            assert!(!code.name().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_uppercase_code() {
        let json = serde_json::to_string(&CurrencyCode::KES).unwrap();
        assert_eq!(json, "\"KES\"");
        let parsed: CurrencyCode = serde_json::from_str("\"GHS\"").unwrap();
        assert_eq!(parsed, CurrencyCode::GHS);
    }

    #[test]
    fn test_format_amount_uses_display_precision() {
        assert_eq!(CurrencyCode::EUR.format_amount(39.9585), "€39.96");
        assert_eq!(CurrencyCode::JPY.format_amount(1234.6), "¥1235");
    }
}
