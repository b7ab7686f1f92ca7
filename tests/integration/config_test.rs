//! Configuration integration tests

use odds_hedge::config::Config;
use odds_hedge::hedge::{calculate_risk_free_bets, ExactSolver, HedgeSolver, PayoffMatrix};
use odds_hedge::telemetry::LogFormat;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.telemetry.log_level, "info");
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
    assert_eq!(config.solver.negative_stake_tolerance, 0.0);
}

#[test]
fn test_configured_solver_matches_default() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    let payoff = PayoffMatrix::from_american(&[-150.0, 300.0]).unwrap();

    let solver = ExactSolver::from_config(&config.solver);
    let ones = nalgebra::DVector::from_element(2, 1.0);
    let configured = solver.solve(payoff.as_matrix(), &ones).unwrap();
    let default = calculate_risk_free_bets(payoff.as_matrix()).unwrap();

    assert_eq!(configured, default);
}
