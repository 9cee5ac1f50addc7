//! Regularity scoring over bucketed windows.

use serde::{Deserialize, Serialize};

use cadence_domain::Window;

const OCCUPIED_REWARD: f64 = 1.0;
const DUPLICATE_PENALTY: f64 = 0.5;

/// Occupancy-based regularity score: how consistently exactly one payment lands per window.
pub struct RegularityScorer;

impl RegularityScorer {
    /// Mean per-window contribution: `1` for exactly one transaction, `0.5` for two or
    /// more, `0` for none. Zero windows score `0`.
    pub fn score(windows: &[Window]) -> f64 {
        if windows.is_empty() {
            return 0.0;
        }
        let total: f64 = windows.iter().map(Self::contribution).sum();
        total / windows.len() as f64
    }

    pub fn contribution(window: &Window) -> f64 {
        match window.len() {
            0 => 0.0,
            1 => OCCUPIED_REWARD,
            _ => OCCUPIED_REWARD - DUPLICATE_PENALTY,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Mean and population standard deviation of per-window credited totals.
pub struct WindowStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl WindowStatistics {
    /// Empty windows contribute a total of zero. `None` when there are no windows.
    pub fn from_windows(windows: &[Window]) -> Option<Self> {
        let totals: Vec<f64> = windows.iter().map(Window::total_amount).collect();
        let (mean, std_dev) = mean_and_stddev(&totals)?;
        Some(Self { mean, std_dev })
    }
}

fn mean_and_stddev(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}
