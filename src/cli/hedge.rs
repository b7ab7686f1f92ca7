//! Hedge command implementation

use clap::Args;
use nalgebra::DVector;
use serde::Serialize;

use super::{print_json, OutputFormat};
use crate::config::SolverConfig;
use crate::hedge::{
    is_infeasible, total_stake, ExactSolver, HedgeSolver, LeastSquaresSolver, PayoffMatrix,
};

#[derive(Args, Debug)]
pub struct HedgeArgs {
    /// American odds of each bet, one per outcome
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<f64>,

    /// Target profit per outcome; switches to the least-squares solver
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub target: Option<Vec<f64>>,

    /// Scale stakes so they sum to this amount
    #[arg(long)]
    pub bankroll: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Stakes and resulting profits for a hedge
#[derive(Debug, Clone, Serialize)]
pub struct HedgeReport {
    pub mode: &'static str,
    pub decimal_odds: Vec<f64>,
    pub stakes: Vec<f64>,
    pub outcome_profits: Vec<f64>,
    pub total_stake: f64,
    pub feasible: bool,
}

impl HedgeArgs {
    pub fn report(&self, config: &SolverConfig) -> anyhow::Result<HedgeReport> {
        if let Some(bankroll) = self.bankroll {
            if !bankroll.is_finite() || bankroll <= 0.0 {
                anyhow::bail!("Bankroll must be a positive amount, got {}", bankroll);
            }
        }
        let payoff = PayoffMatrix::from_american(&self.odds)?;

        let solver: Box<dyn HedgeSolver> = match self.target {
            Some(_) => Box::new(LeastSquaresSolver::from_config(config)),
            None => Box::new(ExactSolver::from_config(config)),
        };
        let target = match &self.target {
            Some(target) => DVector::from_column_slice(target),
            None => DVector::from_element(payoff.dim(), 1.0),
        };

        let mut stakes = solver.solve(payoff.as_matrix(), &target)?;
        // The least-squares solver applies its own stake tolerance
        let feasible = match self.target {
            Some(_) => !is_infeasible(&stakes),
            None => stakes.iter().all(|&s| s >= 0.0),
        };

        if let Some(bankroll) = self.bankroll {
            let total = total_stake(&stakes);
            if feasible && total > 0.0 {
                stakes *= bankroll / total;
            } else {
                tracing::warn!(bankroll, "Stakes not scaled: hedge is not feasible");
            }
        }

        let outcome_profits = payoff.outcome_profits(&stakes)?;
        Ok(HedgeReport {
            mode: solver.mode_name(),
            decimal_odds: payoff.decimal_odds().to_vec(),
            total_stake: total_stake(&stakes),
            stakes: stakes.iter().copied().collect(),
            outcome_profits: outcome_profits.iter().copied().collect(),
            feasible,
        })
    }

    pub fn execute(&self, config: &SolverConfig) -> anyhow::Result<()> {
        let report = self.report(config)?;
        tracing::info!(
            mode = report.mode,
            bets = report.stakes.len(),
            feasible = report.feasible,
            "Solved hedge"
        );

        match self.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => {
                println!("Mode: {}", report.mode);
                println!("{:>10}  {:>8}  {:>12}  {:>12}", "Odds", "Decimal", "Stake", "Profit");
                for i in 0..report.stakes.len() {
                    println!(
                        "{:>+10}  {:>8.3}  {:>12.2}  {:>12.2}",
                        self.odds[i],
                        report.decimal_odds[i],
                        report.stakes[i],
                        report.outcome_profits[i]
                    );
                }
                println!("Total stake: {:.2}", report.total_stake);
                if !report.feasible {
                    println!("No non-negative hedge exists for these odds");
                }
            }
        }
        Ok(())
    }
}
