//! Conversions between American, decimal and fractional odds
//!
//! American odds are the pivot: implied probability is always computed from
//! the American form, so decimal and fractional quotes are first truncated
//! to an integer moneyline.

use num_traits::Float;

use super::{Fraction, Odds, OddsError, OddsType};

/// Implied probability of a tagged odds quote
///
/// Decimal and fractional quotes are normalized to American odds first. An
/// American quote of exactly 0 yields a probability of 0 rather than an error.
pub fn implied_probability(odds: Odds) -> Result<f64, OddsError> {
    let american_odds = odds.to_american()?;
    Ok(american_implied_probability(american_odds))
}

/// Implied probability of an untagged value in the given format
///
/// A fractional value is read as the real net-profit ratio.
pub fn implied_probability_of(value: f64, odds_type: OddsType) -> Result<f64, OddsError> {
    let american_odds = match odds_type {
        OddsType::American => {
            ensure_finite(value)?;
            value
        }
        OddsType::Decimal => decimal_to_american(value)? as f64,
        OddsType::Fractional => {
            ensure_finite(value)?;
            decimal_to_american(1.0 + value)? as f64
        }
    };
    Ok(american_implied_probability(american_odds))
}

/// Implied probability straight from American odds, without validation
pub(crate) fn american_implied_probability(american_odds: f64) -> f64 {
    if american_odds > 0.0 {
        // (1 - p) / p = odds / 100
        100.0 / (100.0 + american_odds)
    } else {
        american_odds.abs() / (american_odds.abs() + 100.0)
    }
}

/// Convert decimal odds to American odds, truncating toward zero
///
/// Decimal odds below 2 map to negative odds; 2.0 itself maps to +100.
///
/// ```
/// use odds_hedge::odds::decimal_to_american;
///
/// assert_eq!(decimal_to_american(1.25).unwrap(), -400);
/// assert_eq!(decimal_to_american(2.4).unwrap(), 140);
/// assert_eq!(decimal_to_american(10.0).unwrap(), 900);
/// ```
pub fn decimal_to_american(decimal_odds: f64) -> Result<i64, OddsError> {
    ensure_finite(decimal_odds)?;
    if decimal_odds <= 1.0 {
        return Err(OddsError::invalid(
            decimal_odds,
            "decimal odds must be greater than 1",
        ));
    }

    let american_odds = if decimal_odds < 2.0 {
        -100.0 / (decimal_odds - 1.0)
    } else {
        (decimal_odds - 1.0) * 100.0
    };

    if american_odds.abs() >= i64::MAX as f64 {
        return Err(OddsError::invalid(
            decimal_odds,
            "American equivalent is out of range",
        ));
    }
    Ok(american_odds.trunc() as i64)
}

/// Convert American odds to decimal (European) odds
///
/// 0 is accepted and yields the degenerate decimal value 1.0.
///
/// ```
/// use odds_hedge::odds::american_to_decimal;
///
/// assert_eq!(american_to_decimal(400.0).unwrap(), 5.0);
/// assert_eq!(american_to_decimal(-100.0).unwrap(), 2.0);
/// ```
pub fn american_to_decimal(american_odds: f64) -> Result<f64, OddsError> {
    ensure_finite(american_odds)?;
    let decimal_odds = if american_odds < 0.0 {
        1.0 + 100.0 / american_odds.abs()
    } else {
        (100.0 + american_odds) / 100.0
    };
    Ok(decimal_odds)
}

/// Convert American odds to fractional odds via their decimal form
pub fn american_to_fractional(american_odds: f64) -> Result<Fraction, OddsError> {
    let decimal_odds = american_to_decimal(american_odds)?;
    decimal_to_fractional(decimal_odds)
}

/// Convert fractional odds to American odds via floating-point decimal odds
pub fn fractional_to_american(fractional_odds: Fraction) -> Result<i64, OddsError> {
    decimal_to_american(fractional_to_decimal(fractional_odds))
}

/// Convert decimal odds to the exact rational value of `decimal_odds - 1`
///
/// The rational is taken from the binary value of the float, not from its
/// shortest decimal spelling. 1.13 therefore does not give 13/100 but
/// 146366987889541/1125899906842624, the exact value of `1.13 - 1.0`.
/// Callers wanting "pretty" fractions should start from exact quotes.
///
/// ```
/// use odds_hedge::odds::{decimal_to_fractional, Fraction};
///
/// assert_eq!(decimal_to_fractional(5.0).unwrap(), Fraction::new(4, 1));
/// assert_eq!(decimal_to_fractional(1.25).unwrap(), Fraction::new(1, 4));
/// ```
pub fn decimal_to_fractional(decimal_odds: f64) -> Result<Fraction, OddsError> {
    ensure_finite(decimal_odds)?;
    if decimal_odds < 1.0 {
        return Err(OddsError::invalid(
            decimal_odds,
            "decimal odds must be at least 1",
        ));
    }
    exact_fraction(decimal_odds - 1.0).ok_or_else(|| {
        OddsError::invalid(decimal_odds, "fraction does not fit in 64-bit integers")
    })
}

/// Convert fractional odds to decimal odds
pub fn fractional_to_decimal(fractional_odds: Fraction) -> f64 {
    let numerator = *fractional_odds.numer() as f64;
    let denominator = *fractional_odds.denom() as f64;
    1.0 + numerator / denominator
}

/// Checked fraction constructor
pub fn fraction(numerator: i64, denominator: i64) -> Result<Fraction, OddsError> {
    if denominator == 0 {
        return Err(OddsError::invalid(
            format!("{}/{}", numerator, denominator),
            "denominator must be non-zero",
        ));
    }
    Ok(Fraction::new(numerator, denominator))
}

pub(crate) fn ensure_finite(value: f64) -> Result<(), OddsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OddsError::invalid(value, "odds must be finite"))
    }
}

/// Exact rational value of a finite float, if it fits in i64 terms
fn exact_fraction(value: f64) -> Option<Fraction> {
    if value == 0.0 {
        return Some(Fraction::from_integer(0));
    }

    // value == sign * mantissa * 2^exponent
    let (mantissa, exponent, sign) = Float::integer_decode(value);
    let shift = mantissa.trailing_zeros();
    let mantissa = i64::try_from(mantissa >> shift).ok()? * i64::from(sign);
    let exponent = i32::from(exponent) + shift as i32;

    if exponent >= 0 {
        let scale = 2i64.checked_pow(exponent.unsigned_abs())?;
        mantissa.checked_mul(scale).map(Fraction::from_integer)
    } else {
        let denominator = 2i64.checked_pow(exponent.unsigned_abs())?;
        Some(Fraction::new(mantissa, denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Parallel quotes of the same odds in each format
    const DECIMAL: [f64; 5] = [1.25, 2.0, 3.0, 5.0, 14.0];
    const AMERICAN: [i64; 5] = [-400, 100, 200, 400, 1300];

    fn fractional() -> [Fraction; 5] {
        [
            Fraction::new(1, 4),
            Fraction::new(1, 1),
            Fraction::new(2, 1),
            Fraction::new(4, 1),
            Fraction::new(13, 1),
        ]
    }

    #[test]
    fn test_american_to_decimal() {
        for (american, decimal) in AMERICAN.iter().zip(DECIMAL) {
            assert_eq!(american_to_decimal(*american as f64).unwrap(), decimal);
        }
        assert_eq!(american_to_decimal(-100.0).unwrap(), 2.0);
    }

    #[test]
    fn test_american_to_fractional() {
        for (american, fraction) in AMERICAN.iter().zip(fractional()) {
            assert_eq!(american_to_fractional(*american as f64).unwrap(), fraction);
        }
    }

    #[test]
    fn test_decimal_to_american() {
        for (decimal, american) in DECIMAL.iter().zip(AMERICAN) {
            assert_eq!(decimal_to_american(*decimal).unwrap(), american);
        }
    }

    #[test]
    fn test_decimal_to_fractional() {
        for (decimal, fraction) in DECIMAL.iter().zip(fractional()) {
            assert_eq!(decimal_to_fractional(*decimal).unwrap(), fraction);
        }
    }

    #[test]
    fn test_fractional_to_american() {
        for (fraction, american) in fractional().iter().zip(AMERICAN) {
            assert_eq!(fractional_to_american(*fraction).unwrap(), american);
        }
    }

    #[test]
    fn test_fractional_to_decimal() {
        for (fraction, decimal) in fractional().iter().zip(DECIMAL) {
            assert_eq!(fractional_to_decimal(*fraction), decimal);
        }
    }

    #[test]
    fn test_decimal_two_takes_positive_branch() {
        assert_eq!(decimal_to_american(2.0).unwrap(), 100);
        assert_eq!(decimal_to_american(1.5).unwrap(), -200);
    }

    #[test]
    fn test_decimal_to_american_truncates_toward_zero() {
        // -100 / 0.3 = -333.33...
        assert_eq!(decimal_to_american(1.3).unwrap(), -333);
        assert_eq!(decimal_to_american(2.5).unwrap(), 150);
        assert_eq!(decimal_to_american(3.555).unwrap(), 255);
    }

    #[test]
    fn test_decimal_to_american_rejects_invalid() {
        assert!(decimal_to_american(1.0).is_err());
        assert!(decimal_to_american(0.5).is_err());
        assert!(decimal_to_american(-3.0).is_err());
        assert!(decimal_to_american(f64::NAN).is_err());
        assert!(decimal_to_american(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_american_is_degenerate_not_error() {
        assert_eq!(american_to_decimal(0.0).unwrap(), 1.0);
        assert_eq!(implied_probability(Odds::American(0.0)).unwrap(), 0.0);
        assert_eq!(american_to_fractional(0.0).unwrap(), Fraction::from_integer(0));
    }

    #[test]
    fn test_implied_probability() {
        let underdog = implied_probability(Odds::American(310.0)).unwrap();
        assert!((underdog - 0.2439).abs() < 1e-4);

        let favorite = implied_probability(Odds::American(-280.0)).unwrap();
        assert!((favorite - 0.7368).abs() < 1e-4);

        let even = implied_probability(Odds::American(100.0)).unwrap();
        assert_eq!(even, 0.5);
    }

    #[test]
    fn test_implied_probability_across_formats() {
        let american = implied_probability(Odds::American(-400.0)).unwrap();
        let decimal = implied_probability(Odds::Decimal(1.25)).unwrap();
        let fractional = implied_probability(Odds::Fractional(Fraction::new(1, 4))).unwrap();

        assert!((american - 0.8).abs() < 1e-9);
        assert!((american - decimal).abs() < 1e-9);
        assert!((american - fractional).abs() < 1e-9);
    }

    #[test]
    fn test_implied_probability_of_untagged_value() {
        let p = implied_probability_of(5.0, OddsType::Decimal).unwrap();
        assert!((p - 0.2).abs() < 1e-12);

        let p = implied_probability_of(0.25, OddsType::Fractional).unwrap();
        assert!((p - 0.8).abs() < 1e-12);

        assert!(implied_probability_of(f64::NAN, OddsType::American).is_err());
    }

    #[test]
    fn test_decimal_to_fractional_uses_binary_value() {
        let fraction = decimal_to_fractional(1.13).unwrap();
        assert_ne!(fraction, Fraction::new(13, 100));
        // Exact: the float difference converts back without loss
        assert_eq!(
            *fraction.numer() as f64 / *fraction.denom() as f64,
            1.13 - 1.0
        );
        assert!(fraction.denom().count_ones() == 1);
    }

    #[test]
    fn test_decimal_to_fractional_rejects_below_one() {
        assert!(decimal_to_fractional(0.99).is_err());
        assert_eq!(decimal_to_fractional(1.0).unwrap(), Fraction::from_integer(0));
    }

    #[test]
    fn test_fraction_constructor() {
        assert_eq!(fraction(6, 5).unwrap(), Fraction::new(12, 10));
        assert!(fraction(1, 0).is_err());
    }
}
