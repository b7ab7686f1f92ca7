//! Odds representation types

use num_rational::Ratio;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Exact net-profit-to-stake ratio, always reduced with a positive denominator
pub type Fraction = Ratio<i64>;

/// Odds conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OddsError {
    /// Value violates the constraints of its representation
    #[error("Invalid odds {value}: {reason}")]
    InvalidOdds { value: String, reason: &'static str },
}

impl OddsError {
    pub(crate) fn invalid(value: impl fmt::Display, reason: &'static str) -> Self {
        OddsError::InvalidOdds {
            value: value.to_string(),
            reason,
        }
    }
}

/// Odds format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddsType {
    /// Moneyline, e.g. +400 or -280
    #[default]
    American,
    /// European payout multiple, e.g. 5.0
    Decimal,
    /// Net profit ratio, e.g. 4/1
    Fractional,
}

impl fmt::Display for OddsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsType::American => write!(f, "american"),
            OddsType::Decimal => write!(f, "decimal"),
            OddsType::Fractional => write!(f, "fractional"),
        }
    }
}

impl FromStr for OddsType {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" | "moneyline" => Ok(OddsType::American),
            "decimal" | "european" => Ok(OddsType::Decimal),
            "fractional" => Ok(OddsType::Fractional),
            _ => Err(OddsError::invalid(s, "unknown odds type")),
        }
    }
}

/// An odds quote tagged with its representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Odds {
    American(f64),
    Decimal(f64),
    Fractional(Fraction),
}

impl Odds {
    /// Parse a quote written in the given format
    ///
    /// Fractional quotes are written `numerator/denominator`; a bare integer
    /// is read as `n/1`.
    pub fn parse(input: &str, odds_type: OddsType) -> Result<Self, OddsError> {
        let input = input.trim();
        match odds_type {
            OddsType::American => parse_f64(input).map(Odds::American),
            OddsType::Decimal => parse_f64(input).map(Odds::Decimal),
            OddsType::Fractional => {
                let (numer, denom) = match input.split_once('/') {
                    Some((n, d)) => (n.trim(), d.trim()),
                    None => (input, "1"),
                };
                let numer = numer
                    .parse::<i64>()
                    .map_err(|_| OddsError::invalid(input, "numerator is not an integer"))?;
                let denom = denom
                    .parse::<i64>()
                    .map_err(|_| OddsError::invalid(input, "denominator is not an integer"))?;
                super::fraction(numer, denom).map(Odds::Fractional)
            }
        }
    }

    /// Representation of this quote
    pub fn odds_type(&self) -> OddsType {
        match self {
            Odds::American(_) => OddsType::American,
            Odds::Decimal(_) => OddsType::Decimal,
            Odds::Fractional(_) => OddsType::Fractional,
        }
    }

    /// American form; decimal and fractional quotes are truncated to an integer
    pub fn to_american(&self) -> Result<f64, OddsError> {
        match *self {
            Odds::American(american) => super::ensure_finite(american).map(|_| american),
            Odds::Decimal(decimal) => super::decimal_to_american(decimal).map(|a| a as f64),
            Odds::Fractional(fraction) => super::fractional_to_american(fraction).map(|a| a as f64),
        }
    }

    /// Decimal form
    pub fn to_decimal(&self) -> Result<f64, OddsError> {
        match *self {
            Odds::American(american) => super::american_to_decimal(american),
            Odds::Decimal(decimal) => {
                super::ensure_finite(decimal)?;
                if decimal <= 1.0 {
                    return Err(OddsError::invalid(decimal, "decimal odds must be greater than 1"));
                }
                Ok(decimal)
            }
            Odds::Fractional(fraction) => Ok(super::fractional_to_decimal(fraction)),
        }
    }

    /// Fractional form
    pub fn to_fractional(&self) -> Result<Fraction, OddsError> {
        match *self {
            Odds::American(american) => super::american_to_fractional(american),
            Odds::Decimal(decimal) => super::decimal_to_fractional(decimal),
            Odds::Fractional(fraction) => Ok(fraction),
        }
    }

    /// Break-even win probability implied by this quote
    pub fn implied_probability(&self) -> Result<f64, OddsError> {
        super::implied_probability(*self)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Odds::American(american) => write!(f, "{:+}", american),
            Odds::Decimal(decimal) => write!(f, "{:.2}", decimal),
            Odds::Fractional(fraction) => write!(f, "{}/{}", fraction.numer(), fraction.denom()),
        }
    }
}

fn parse_f64(input: &str) -> Result<f64, OddsError> {
    input
        .parse::<f64>()
        .map_err(|_| OddsError::invalid(input, "not a number"))
}
