//! Surface command implementation

use clap::Args;
use serde::Serialize;
use std::str::FromStr;

use super::{print_json, OutputFormat};
use crate::odds::vig_surface;

/// Largest number of points a range may expand to
pub const MAX_RANGE_POINTS: usize = 10_000;

/// Half-open range of American odds, written `start:end:step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OddsRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl OddsRange {
    /// Values from `start` up to but excluding `end`
    pub fn values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    /// Number of points in the range
    pub fn len(&self) -> usize {
        self.point_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn point_count(&self) -> f64 {
        ((self.end - self.start) / self.step).ceil().max(0.0)
    }
}

impl FromStr for OddsRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (start, end, step) = match parts.as_slice() {
            [start, end] => (*start, *end, "1"),
            [start, end, step] => (*start, *end, *step),
            _ => return Err(format!("expected start:end[:step], got '{}'", s)),
        };
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", v))
        };
        let range = OddsRange {
            start: parse(start)?,
            end: parse(end)?,
            step: parse(step)?,
        };
        let finite = range.start.is_finite() && range.end.is_finite() && range.step.is_finite();
        if !finite || range.step <= 0.0 {
            return Err(format!("invalid range '{}'", s));
        }
        if range.point_count() > MAX_RANGE_POINTS as f64 {
            return Err(format!(
                "range '{}' exceeds {} points",
                s, MAX_RANGE_POINTS
            ));
        }
        Ok(range)
    }
}

#[derive(Args, Debug)]
pub struct SurfaceArgs {
    /// Odds of the first side, start:end:step
    #[arg(long, default_value = "-500:-100:50", allow_hyphen_values = true)]
    pub first: OddsRange,

    /// Odds of the second side, start:end:step
    #[arg(long, default_value = "100:500:50", allow_hyphen_values = true)]
    pub second: OddsRange,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurfaceReport {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
    /// Row i holds |vig| of first[i] against every second[j]
    pub vig: Vec<Vec<f64>>,
}

impl SurfaceArgs {
    pub fn report(&self) -> anyhow::Result<SurfaceReport> {
        let first = self.first.values();
        let second = self.second.values();
        let surface = vig_surface(&first, &second)?;
        let vig = surface
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        Ok(SurfaceReport { first, second, vig })
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let report = self.report()?;
        tracing::info!(
            rows = report.first.len(),
            columns = report.second.len(),
            "Computed vig surface"
        );

        match self.format {
            OutputFormat::Json => print_json(&report)?,
            OutputFormat::Table => {
                print!("{:>8}", "");
                for b in &report.second {
                    print!("{:>+9}", b);
                }
                println!();
                for (a, row) in report.first.iter().zip(&report.vig) {
                    print!("{:>+8}", a);
                    for v in row {
                        print!("{:>8.2}%", v * 100.0);
                    }
                    println!();
                }
            }
        }
        Ok(())
    }
}
