//! Payoff matrix construction
//!
//! Rows are outcomes, columns are bets. Entry `(i, j)` is the net profit per
//! unit staked on bet `j` when outcome `i` occurs: `decimal_j - 1` on the
//! diagonal, and `-1` everywhere else since a losing stake is forfeited.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use super::HedgeError;
use crate::odds::american_to_decimal;

/// Square payoff matrix for a set of mutually exclusive bets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffMatrix {
    matrix: DMatrix<f64>,
    decimal_odds: Vec<f64>,
}

impl PayoffMatrix {
    /// Build the payoff matrix for bets quoted in American odds
    ///
    /// The input is only read; the matrix is freshly allocated.
    pub fn from_american(american_odds: &[f64]) -> Result<Self, HedgeError> {
        if american_odds.is_empty() {
            return Err(HedgeError::EmptyMarket);
        }

        let decimal_odds = american_odds
            .iter()
            .map(|&odds| american_to_decimal(odds))
            .collect::<Result<Vec<_>, _>>()?;

        let n = decimal_odds.len();
        let matrix = DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                decimal_odds[i] - 1.0
            } else {
                -1.0
            }
        });

        tracing::trace!(bets = n, "Built payoff matrix");
        Ok(Self {
            matrix,
            decimal_odds,
        })
    }

    /// Number of bets (and outcomes)
    pub fn dim(&self) -> usize {
        self.decimal_odds.len()
    }

    /// Decimal odds of each bet, in input order
    pub fn decimal_odds(&self) -> &[f64] {
        &self.decimal_odds
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.matrix
    }

    /// Net profit under each outcome for the given stakes
    pub fn outcome_profits(&self, bets: &DVector<f64>) -> Result<DVector<f64>, HedgeError> {
        if bets.len() != self.dim() {
            return Err(HedgeError::DimensionMismatch {
                expected: format!("{} stakes", self.dim()),
                actual: format!("{} stakes", bets.len()),
            });
        }
        Ok(&self.matrix * bets)
    }
}

impl AsRef<DMatrix<f64>> for PayoffMatrix {
    fn as_ref(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

/// Build the payoff matrix for bets quoted in American odds
pub fn make_payoff_matrix(american_odds: &[f64]) -> Result<DMatrix<f64>, HedgeError> {
    PayoffMatrix::from_american(american_odds).map(PayoffMatrix::into_inner)
}
