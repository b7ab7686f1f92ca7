//! Vig command implementation

use clap::Args;
use serde::Serialize;

use super::{print_json, OutputFormat};
use crate::odds::{self, Odds};

#[derive(Args, Debug)]
pub struct VigArgs {
    /// American odds of every outcome in the market
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct VigReport {
    pub odds: Vec<f64>,
    pub implied_probabilities: Vec<f64>,
    pub vig: f64,
}

impl VigReport {
    pub fn from_american(american_odds: &[f64]) -> anyhow::Result<Self> {
        let implied_probabilities = american_odds
            .iter()
            .map(|&a| odds::implied_probability(Odds::American(a)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            odds: american_odds.to_vec(),
            implied_probabilities,
            vig: odds::vig(american_odds)?,
        })
    }
}

impl VigArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let report = VigReport::from_american(&self.odds)?;
        tracing::info!(outcomes = self.odds.len(), vig = report.vig, "Computed vig");

        match self.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => {
                println!("{:>10}  {:>12}", "Odds", "Implied");
                for (a, p) in report.odds.iter().zip(&report.implied_probabilities) {
                    println!("{:>+10}  {:>11.2}%", a, p * 100.0);
                }
                println!("Vig: {:.2}%", report.vig * 100.0);
            }
        }
        Ok(())
    }
}
