use clap::Parser;
use odds_hedge::cli::{Cli, Commands};
use odds_hedge::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    odds_hedge::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Convert(args) => args.execute()?,
        Commands::Vig(args) => args.execute()?,
        Commands::Surface(args) => args.execute()?,
        Commands::Hedge(args) => {
            tracing::debug!(bets = args.odds.len(), "Starting hedge");
            args.execute(&config.solver)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Solver: singularity_tolerance={:e}, lstsq_rcond={:e}, negative_stake_tolerance={:e}",
                config.solver.singularity_tolerance,
                config.solver.lstsq_rcond,
                config.solver.negative_stake_tolerance
            );
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
