//! Bookmaker overround ("vig")

use nalgebra::DMatrix;

use super::{american_implied_probability, ensure_finite, OddsError};

/// Vig of a market: sum of the implied probabilities of its American quotes, minus 1
///
/// A fair book sums to exactly 1; anything above is the bookmaker's margin.
pub fn vig(american_odds: &[f64]) -> Result<f64, OddsError> {
    let mut total = 0.0;
    for &odds in american_odds {
        ensure_finite(odds)?;
        total += american_implied_probability(odds);
    }
    Ok(total - 1.0)
}

/// Vig on a two-way moneyline
pub fn vig_on_moneyline_split(first: f64, second: f64) -> Result<f64, OddsError> {
    vig(&[first, second])
}

/// Absolute moneyline vig over every pairing of two odds ranges
///
/// Entry `(i, j)` is `|vig(first[i], second[j])|`.
pub fn vig_surface(first: &[f64], second: &[f64]) -> Result<DMatrix<f64>, OddsError> {
    let mut surface = DMatrix::zeros(first.len(), second.len());
    for (i, &odds1) in first.iter().enumerate() {
        for (j, &odds2) in second.iter().enumerate() {
            surface[(i, j)] = vig_on_moneyline_split(odds1, odds2)?.abs();
        }
    }
    Ok(surface)
}
