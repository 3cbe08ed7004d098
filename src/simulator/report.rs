//! Simulation report generation.

use crate::config::RampLevel;
use serde::Serialize;

/// Outcome of one simulated flight.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub level: RampLevel,
    pub threshold: f64,
    pub crashed: bool,
    pub crash_time_ms: Option<u64>,
    pub crash_position: Option<f64>,
    pub burns: u32,
    /// Smallest position reached (closest to the top of the viewport).
    pub highest_point: f64,
    pub simulated_ms: u64,
}

/// Results from all simulated flights.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub runs: Vec<RunStats>,
    pub crashes: usize,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let crashes = runs.iter().filter(|r| r.crashed).count();
        Self { runs, crashes }
    }

    /// Generate a human-readable table.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str("Ramp       Threshold  Outcome      Time     Burns  Highest\n");
        report.push_str("─────────  ─────────  ───────────  ───────  ─────  ───────\n");
        for run in &self.runs {
            let (outcome, time) = match run.crash_time_ms {
                Some(ms) => ("crashed", format!("{:.2}s", ms as f64 / 1000.0)),
                None => ("survived", format!("{:.2}s", run.simulated_ms as f64 / 1000.0)),
            };
            report.push_str(&format!(
                "{:<9}  {:>9.1}  {:<11}  {:>7}  {:>5}  {:>7.1}\n",
                run.level.name(),
                run.threshold,
                outcome,
                time,
                run.burns,
                run.highest_point
            ));
        }
        report.push_str(&format!(
            "\n{} of {} flights hit the ramp\n",
            self.crashes,
            self.runs.len()
        ));
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
