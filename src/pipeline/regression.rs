//! Ordinary least squares trendline.

use serde::Serialize;

use crate::dataset::Observation;

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Number of points the fit used.
    pub points: usize,
    pub x_min: f64,
    pub x_max: f64,
}

impl Trendline {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Fit `y` on `x` by least squares.
///
/// Returns `None` for fewer than two points or when every `x` is equal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fit_ols(points: &[(f64, f64)]) -> Option<Trendline> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
    });
    if sxx.abs() < f64::EPSILON {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);
    // A flat response is fitted exactly
    let r_squared = if syy.abs() < f64::EPSILON {
        1.0
    } else {
        (sxy * sxy) / (sxx * syy)
    };

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);

    Some(Trendline {
        slope,
        intercept,
        r_squared,
        points: points.len(),
        x_min,
        x_max,
    })
}

/// `(year, value)` pairs usable for a fit; rows without either are skipped.
#[must_use]
pub fn trend_points(rows: &[Observation]) -> Vec<(f64, f64)> {
    rows.iter()
        .filter_map(|r| {
            let year = r.time_period.year()?;
            let value = r.obs_value.as_f64()?;
            Some((f64::from(year), value))
        })
        .collect()
}

/// One line over the whole selection, pooled across countries.
#[must_use]
pub fn pooled_trend(rows: &[Observation]) -> Option<Trendline> {
    fit_ols(&trend_points(rows))
}

#[cfg(test)]
#[path = "regression_tests.rs"]
mod tests;
