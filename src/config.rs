//! Configuration types for odds-hedge

use serde::{Deserialize, Serialize};

use crate::hedge::{LSTSQ_RCOND, NEGATIVE_STAKE_TOLERANCE, SINGULARITY_TOLERANCE};
use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Numeric tolerances for the hedge solvers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Minimum ratio of smallest to largest singular value for the exact solve
    #[serde(default = "default_singularity_tolerance")]
    pub singularity_tolerance: f64,

    /// Relative singular value cutoff for least squares
    #[serde(default = "default_lstsq_rcond")]
    pub lstsq_rcond: f64,

    /// Slack below zero before a least-squares stake is treated as negative
    #[serde(default = "default_negative_stake_tolerance")]
    pub negative_stake_tolerance: f64,
}

fn default_singularity_tolerance() -> f64 {
    SINGULARITY_TOLERANCE
}
fn default_lstsq_rcond() -> f64 {
    LSTSQ_RCOND
}
fn default_negative_stake_tolerance() -> f64 {
    NEGATIVE_STAKE_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            singularity_tolerance: SINGULARITY_TOLERANCE,
            lstsq_rcond: LSTSQ_RCOND,
            negative_stake_tolerance: NEGATIVE_STAKE_TOLERANCE,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
