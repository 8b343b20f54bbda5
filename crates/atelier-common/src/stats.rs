//! Statistics helpers
//!
//! Small numeric routines shared by the learning components. All of them
//! treat degenerate input (too few points, zero variance, zero totals) as
//! "no signal" and return 0 instead of failing.

use tracing::warn;

/// Round `value` to `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Pearson correlation coefficient between two equally sized series.
///
/// Returns 0 when fewer than two points are supplied, when either series
/// has zero variance, or when the lengths differ. The result is rounded
/// to 3 decimals and lies in [-1, 1].
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() {
        warn!(
            xs = xs.len(),
            ys = ys.len(),
            "pearson_correlation called with mismatched series"
        );
        return 0.0;
    }

    let n = xs.len();
    if n < 2 {
        return 0.0;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut num = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = (denom_x * denom_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    round_to((num / denom).clamp(-1.0, 1.0), 3)
}

/// Gini coefficient of a set of non-negative values.
///
/// Works on a sorted copy; the input is left untouched. Empty input or a
/// zero total yields 0.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64 + 1.0) * v)
        .sum();

    let gini = (2.0 * weighted) / (n * total) - (n + 1.0) / n;
    round_to(gini.clamp(0.0, 1.0), 3)
}

/// Least-squares slope of `ys` against `xs`, rounded to 1 decimal.
pub fn linear_slope(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }

    let xs = &xs[..n];
    let ys = &ys[..n];
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut num = 0.0;
    let mut var_x = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        num += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x) * (x - mean_x);
    }

    if var_x == 0.0 {
        return 0.0;
    }

    round_to(num / var_x, 1)
}

/// `value` as a whole-number percentage of `total`.
///
/// Not clamped: values above the total give more than 100.
pub fn percentage(value: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as i64
}
