//! Convert command implementation

use clap::Args;
use serde::Serialize;

use super::{print_json, OutputFormat};
use crate::odds::{Odds, OddsType};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Quote to convert, e.g. -280, 4.8 or 19/5
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Format of the quote
    #[arg(long, value_enum, default_value_t = OddsType::American)]
    pub from: OddsType,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// A quote in all three formats
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub american: f64,
    pub decimal: f64,
    pub fractional: String,
    pub implied_probability: f64,
}

impl ConversionReport {
    pub fn from_odds(odds: Odds) -> anyhow::Result<Self> {
        let fraction = odds.to_fractional()?;
        Ok(Self {
            american: odds.to_american()?,
            decimal: odds.to_decimal()?,
            fractional: Odds::Fractional(fraction).to_string(),
            implied_probability: odds.implied_probability()?,
        })
    }
}

impl ConvertArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let odds = Odds::parse(&self.value, self.from)?;
        tracing::info!(odds = %odds, from = %self.from, "Converting odds");

        let report = ConversionReport::from_odds(odds)?;
        match self.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => {
                println!("American:            {:+}", report.american);
                println!("Decimal:             {:.4}", report.decimal);
                println!("Fractional:          {}", report.fractional);
                println!("Implied probability: {:.4}", report.implied_probability);
            }
        }
        Ok(())
    }
}
