//! Bet-size solvers
//!
//! Both solvers take a payoff matrix `M` (rows are outcomes, columns are
//! bets) and a target profit vector `b`, and return stakes `x` with
//! `M · x = b` exactly or in the least-squares sense.

use nalgebra::{DMatrix, DVector};

use super::{HedgeError, HedgeSolver};
use crate::config::SolverConfig;

/// Smallest ratio of smallest to largest singular value accepted by the exact solver
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Singular values below `LSTSQ_RCOND * σ_max` are treated as zero in least squares
pub const LSTSQ_RCOND: f64 = 1e-12;

/// A least-squares stake below `-NEGATIVE_STAKE_TOLERANCE` poisons the result
pub const NEGATIVE_STAKE_TOLERANCE: f64 = 0.0;

/// Exact solver via matrix inversion
///
/// Requires a square, well-conditioned payoff matrix. Stakes are returned
/// as solved: a negative stake means laying that outcome, which a sportsbook
/// usually cannot take, and it is left to the caller to reject.
#[derive(Debug, Clone)]
pub struct ExactSolver {
    /// Minimum reciprocal condition number
    pub singularity_tolerance: f64,
}

impl ExactSolver {
    pub fn new(singularity_tolerance: f64) -> Self {
        Self {
            singularity_tolerance,
        }
    }

    /// Create from SolverConfig
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.singularity_tolerance)
    }

    /// Stakes that return exactly one unit of profit whatever the outcome
    pub fn risk_free(&self, payoff: &DMatrix<f64>) -> Result<DVector<f64>, HedgeError> {
        let ones = DVector::from_element(payoff.nrows(), 1.0);
        self.solve(payoff, &ones)
    }

    fn check_conditioning(&self, payoff: &DMatrix<f64>) -> Result<(), HedgeError> {
        let singular_values = payoff.singular_values();
        let (min, max) = singular_values
            .iter()
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), &s| (lo.min(s), hi.max(s)));

        if max == 0.0 || min / max < self.singularity_tolerance {
            tracing::debug!(
                min_singular_value = min,
                max_singular_value = max,
                "Payoff matrix is singular"
            );
            return Err(HedgeError::SingularMatrix);
        }
        Ok(())
    }
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self::new(SINGULARITY_TOLERANCE)
    }
}

impl HedgeSolver for ExactSolver {
    fn solve(
        &self,
        payoff: &DMatrix<f64>,
        target: &DVector<f64>,
    ) -> Result<DVector<f64>, HedgeError> {
        check_inputs(payoff, target)?;
        if !payoff.is_square() {
            return Err(HedgeError::DimensionMismatch {
                expected: "square payoff matrix".to_string(),
                actual: format!("{}x{}", payoff.nrows(), payoff.ncols()),
            });
        }
        self.check_conditioning(payoff)?;

        let inverse = payoff
            .clone()
            .try_inverse()
            .ok_or(HedgeError::SingularMatrix)?;
        Ok(inverse * target)
    }

    fn mode_name(&self) -> &'static str {
        "exact"
    }
}

/// Least-squares solver with a non-negativity check
///
/// Accepts any matrix shape. The minimum-norm least-squares solution is
/// computed by SVD; if any stake comes out negative, no non-negative hedge
/// reaches the target and every stake is replaced by NaN.
#[derive(Debug, Clone)]
pub struct LeastSquaresSolver {
    /// Relative cutoff for small singular values
    pub rcond: f64,
    /// Slack allowed below zero before a stake counts as negative
    pub negative_stake_tolerance: f64,
}

impl LeastSquaresSolver {
    pub fn new(rcond: f64, negative_stake_tolerance: f64) -> Self {
        Self {
            rcond,
            negative_stake_tolerance,
        }
    }

    /// Create from SolverConfig
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.lstsq_rcond, config.negative_stake_tolerance)
    }
}

impl Default for LeastSquaresSolver {
    fn default() -> Self {
        Self::new(LSTSQ_RCOND, NEGATIVE_STAKE_TOLERANCE)
    }
}

impl HedgeSolver for LeastSquaresSolver {
    fn solve(
        &self,
        payoff: &DMatrix<f64>,
        target: &DVector<f64>,
    ) -> Result<DVector<f64>, HedgeError> {
        check_inputs(payoff, target)?;

        let svd = payoff
            .clone()
            .try_svd(true, true, f64::EPSILON, 0)
            .ok_or(HedgeError::Decomposition("SVD did not converge"))?;
        let max_singular_value = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
        let cutoff = self.rcond * max_singular_value;

        let mut bets = svd
            .solve(target, cutoff)
            .map_err(HedgeError::Decomposition)?;

        if bets.iter().any(|&stake| stake < -self.negative_stake_tolerance) {
            tracing::debug!(
                profit_target = ?target.as_slice(),
                "No non-negative hedge reaches target"
            );
            bets.fill(f64::NAN);
        }
        Ok(bets)
    }

    fn mode_name(&self) -> &'static str {
        "least-squares"
    }
}

fn check_inputs(payoff: &DMatrix<f64>, target: &DVector<f64>) -> Result<(), HedgeError> {
    if payoff.is_empty() {
        return Err(HedgeError::EmptyMarket);
    }
    if target.len() != payoff.nrows() {
        return Err(HedgeError::DimensionMismatch {
            expected: format!("target of length {}", payoff.nrows()),
            actual: format!("length {}", target.len()),
        });
    }
    if payoff.iter().any(|v| !v.is_finite()) {
        return Err(HedgeError::NonFinite("payoff matrix"));
    }
    if target.iter().any(|v| !v.is_finite()) {
        return Err(HedgeError::NonFinite("target vector"));
    }
    Ok(())
}

/// Stakes that guarantee one unit of profit on every outcome
///
/// Solves `M · x = 1` by inversion. Negative stakes are returned as-is.
pub fn calculate_risk_free_bets(payoff: &DMatrix<f64>) -> Result<DVector<f64>, HedgeError> {
    ExactSolver::default().risk_free(payoff)
}

/// Non-negative stakes approximating the target profit vector
///
/// Returns an all-NaN vector when the least-squares solution needs a
/// negative stake.
pub fn calculate_hedged_bets(
    payoff: &DMatrix<f64>,
    target: &DVector<f64>,
) -> Result<DVector<f64>, HedgeError> {
    LeastSquaresSolver::default().solve(payoff, target)
}

/// True when a least-squares result was poisoned
pub fn is_infeasible(bets: &DVector<f64>) -> bool {
    !bets.is_empty() && bets.iter().all(|stake| stake.is_nan())
}

/// Sum of all stakes
pub fn total_stake(bets: &DVector<f64>) -> f64 {
    bets.sum()
}
