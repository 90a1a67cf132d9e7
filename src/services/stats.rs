//! Order-statistic helpers for the watering analyzer.
//!
//! Quartiles are computed by half-splitting the sorted sample (median of the
//! lower half below floor(n/2), median of the upper half from ceil(n/2)),
//! not by interpolated percentiles. The analyzer depends on this exact
//! definition for deterministic, reproducible outlier fences.

/// Minimum sample size for IQR filtering. Quartiles on tinier samples are
/// not meaningful, so filtering is skipped entirely below this.
pub(crate) const MIN_SAMPLE_FOR_IQR: usize = 4;

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Median of a sample (standard even/odd definition). Returns 0.0 for an
/// empty sample.
pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Q1: median of the lower half of the sorted sample.
pub(crate) fn lower_quartile(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let lower_half = &sorted[..sorted.len() / 2];
    median(lower_half)
}

/// Q3: median of the upper half of the sorted sample.
pub(crate) fn upper_quartile(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let upper_half = &sorted[sorted.len().div_ceil(2)..];
    median(upper_half)
}

/// Remove outliers using the IQR method.
///
/// Values outside `[Q1 - multiplier*IQR, Q3 + multiplier*IQR]` are dropped.
/// With fewer than [`MIN_SAMPLE_FOR_IQR`] values, or when the IQR is zero
/// (all values near-identical), the sample is returned unchanged.
pub(crate) fn remove_outliers_iqr(values: &[f64], multiplier: f64) -> Vec<f64> {
    if values.len() < MIN_SAMPLE_FOR_IQR {
        return values.to_vec();
    }

    let q1 = lower_quartile(values);
    let q3 = upper_quartile(values);
    let iqr = q3 - q1;

    if iqr == 0.0 {
        return values.to_vec();
    }

    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;

    values
        .iter()
        .copied()
        .filter(|v| *v >= lower_bound && *v <= upper_bound)
        .collect()
}

/// Population standard deviation. Returns 0.0 for an empty sample.
pub(crate) fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;
    variance.sqrt()
}
