// src/stats.rs
//
// Central-tendency and dispersion measures over grouped scores. Pure
// functions; every published number is rounded to 2 decimals.

use thiserror::Error;

/// Round to 2 decimals, the precision every report publishes.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Arithmetic mean. Empty input yields 0.0; the report layers only ever
/// pass non-empty groups.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round2(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median: central element of the ascending-sorted values, or the average
/// of the two central elements for even counts.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mid = n / 2;
    let m = if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    round2(m)
}

/// Sample variance: Σ(x − mean)² / (n − 1), with the published (rounded)
/// mean as the center. A single-element or empty group has no dispersion
/// estimate and yields 0.0 rather than dividing by zero.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let avg = mean(values);
    let sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    round2(sum / (values.len() - 1) as f64)
}

/// Central-tendency selector for rating rankings.
///
/// The accepted argument strings are a fixed external contract with a known
/// naming defect: `"average"` selects the arithmetic mean, while `"mean"`
/// selects the *median*. The strings stay as-is for compatibility; this enum
/// is the unambiguous form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Mean,
    Median,
}

#[derive(Debug, Error)]
#[error("invalid metric {0:?}: use \"average\" (arithmetic mean) or \"mean\" (median)")]
pub struct InvalidMetric(String);

impl Metric {
    /// Parse the historical argument strings. Anything else is a fatal
    /// caller error, not a data error.
    pub fn from_arg(arg: &str) -> Result<Self, InvalidMetric> {
        match arg {
            "average" => Ok(Metric::Mean),
            "mean" => Ok(Metric::Median),
            other => Err(InvalidMetric(s!(other))),
        }
    }

    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Metric::Mean => mean(values),
            Metric::Median => median(values),
        }
    }
}
