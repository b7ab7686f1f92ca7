//! Hedge sizing module
//!
//! Payoff matrix construction and bet-size solvers for arbitrage and hedging

mod payoff;
mod solver;
mod types;

pub use payoff::{make_payoff_matrix, PayoffMatrix};
pub use solver::{
    calculate_hedged_bets, calculate_risk_free_bets, is_infeasible, total_stake, ExactSolver,
    LeastSquaresSolver, LSTSQ_RCOND, NEGATIVE_STAKE_TOLERANCE, SINGULARITY_TOLERANCE,
};
pub use types::HedgeError;

use nalgebra::{DMatrix, DVector};

/// Trait for bet-size solver implementations
pub trait HedgeSolver: Send + Sync {
    /// Solve for the stakes reaching `target` profit under each outcome
    fn solve(
        &self,
        payoff: &DMatrix<f64>,
        target: &DVector<f64>,
    ) -> Result<DVector<f64>, HedgeError>;

    /// Get the solver mode name
    fn mode_name(&self) -> &'static str;
}
