//! Approximate exchange rates used when the live rate service is unreachable.
//!
//! These are deliberately coarse. A quote priced from this table is flagged
//! as approximate by the caller.

use crate::CurrencyCode;

/// Rate applied to any pair missing from [`FALLBACK_RATES`].
pub const DEFAULT_FALLBACK_RATE: f64 = 1.0;

/// Entries are `(from, to, rate)`; rate is units of `to` per unit of `from`.
const FALLBACK_RATES: &[(CurrencyCode, CurrencyCode, f64)] = &[
    (CurrencyCode::USD, CurrencyCode::EUR, 0.85),
    (CurrencyCode::EUR, CurrencyCode::USD, 1.18),
    (CurrencyCode::USD, CurrencyCode::GBP, 0.75),
    (CurrencyCode::GBP, CurrencyCode::USD, 1.33),
    (CurrencyCode::USD, CurrencyCode::NGN, 1580.0),
];

/// Returns the approximate rate for `from -> to`.
///
/// Same-currency pairs are 1.0; pairs not in the table default to
/// [`DEFAULT_FALLBACK_RATE`].
pub fn fallback_rate(from: CurrencyCode, to: CurrencyCode) -> f64 {
    if from == to {
        return 1.0;
    }
    FALLBACK_RATES
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, rate)| *rate)
        .unwrap_or(DEFAULT_FALLBACK_RATE)
}

/// Whether the table carries an explicit rate for this pair.
pub fn has_fallback_rate(from: CurrencyCode, to: CurrencyCode) -> bool {
    from == to
        || FALLBACK_RATES
            .iter()
            .any(|(f, t, _)| *f == from && *t == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(fallback_rate(CurrencyCode::USD, CurrencyCode::EUR), 0.85);
        assert_eq!(fallback_rate(CurrencyCode::EUR, CurrencyCode::USD), 1.18);
        assert_eq!(fallback_rate(CurrencyCode::USD, CurrencyCode::GBP), 0.75);
        assert_eq!(fallback_rate(CurrencyCode::GBP, CurrencyCode::USD), 1.33);
        assert_eq!(fallback_rate(CurrencyCode::USD, CurrencyCode::NGN), 1580.0);
    }

    #[test]
    fn test_unknown_pair_defaults_to_parity() {
        assert_eq!(fallback_rate(CurrencyCode::KES, CurrencyCode::JPY), 1.0);
        assert!(!has_fallback_rate(CurrencyCode::KES, CurrencyCode::JPY));
    }

    #[test]
    fn test_same_currency_is_parity() {
        assert_eq!(fallback_rate(CurrencyCode::INR, CurrencyCode::INR), 1.0);
        assert!(has_fallback_rate(CurrencyCode::INR, CurrencyCode::INR));
    }

    #[test]
    fn test_every_rate_is_finite_and_positive() {
        for from in CurrencyCode::all() {
            for to in CurrencyCode::all() {
                let rate = fallback_rate(*from, *to);
                assert!(rate.is_finite() && rate > 0.0, "{from}->{to}");
            }
        }
    }
}
