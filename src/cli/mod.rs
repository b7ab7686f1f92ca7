//! CLI interface for odds-hedge
//!
//! Provides subcommands for:
//! - `convert`: Show a quote in every odds format
//! - `vig`: Implied probabilities and overround of a market
//! - `surface`: Moneyline vig over two odds ranges
//! - `hedge`: Stakes for a risk-free or targeted hedge
//! - `config`: Show configuration

mod convert;
mod hedge;
mod surface;
mod vig;

pub use convert::ConvertArgs;
pub use hedge::HedgeArgs;
pub use surface::SurfaceArgs;
pub use vig::VigArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "odds-hedge")]
#[command(about = "Betting odds conversion and arbitrage hedge sizing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a quote in every odds format
    Convert(ConvertArgs),
    /// Implied probabilities and vig of a market
    Vig(VigArgs),
    /// Moneyline vig over two odds ranges
    Surface(SurfaceArgs),
    /// Stakes for a risk-free or targeted hedge
    Hedge(HedgeArgs),
    /// Show configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
