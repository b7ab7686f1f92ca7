//! odds-hedge: Betting odds conversion and arbitrage hedge sizing
//!
//! This library provides:
//! - Conversion between American, decimal and fractional odds
//! - Implied probability and bookmaker vig
//! - Payoff matrices for sets of mutually exclusive bets
//! - Exact and least-squares bet-size solvers
//! - TOML configuration and structured logging

pub mod cli;
pub mod config;
pub mod hedge;
pub mod odds;
pub mod telemetry;
