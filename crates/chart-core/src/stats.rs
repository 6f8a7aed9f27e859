// File: crates/chart-core/src/stats.rs
// Summary: Descriptive statistics and Gaussian kernel density estimation for violins.
//
// Quantiles use R-7 linear interpolation; KDE bandwidth follows Scott's rule.

use std::f64::consts::PI;

/// Arithmetic mean, `None` for empty input.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (denominator `n - 1`), `None` when `n < 2`.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (data.len() - 1) as f64).sqrt())
}

/// Sorted copy of `data` (NaNs ordered last).
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

/// Quantile `p` in [0, 1] of already sorted data with linear interpolation.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}

pub fn median(data: &[f64]) -> Option<f64> {
    quantile_sorted(&sorted(data), 0.5)
}

/// Five-number summary of one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(data: &[f64]) -> Option<Self> {
        let s = sorted(data);
        Some(Self {
            count: s.len(),
            min: *s.first()?,
            q1: quantile_sorted(&s, 0.25)?,
            median: quantile_sorted(&s, 0.5)?,
            q3: quantile_sorted(&s, 0.75)?,
            max: *s.last()?,
        })
    }
}

/// Gaussian kernel density estimate.
#[derive(Clone, Debug)]
pub struct Kde {
    points: Vec<f64>,
    bandwidth: f64,
}

impl Kde {
    /// Fit with Scott's rule: `std * n^(-1/5)`.
    /// Returns `None` when fewer than two points or zero spread.
    pub fn fit(data: &[f64]) -> Option<Self> {
        let sd = std_dev(data)?;
        let bandwidth = sd * (data.len() as f64).powf(-0.2);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return None;
        }
        Some(Self { points: data.to_vec(), bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`; integrates to 1 over the real line.
    pub fn evaluate(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * PI).sqrt() * self.bandwidth * self.points.len() as f64);
        let sum: f64 = self
            .points
            .iter()
            .map(|xi| {
                let u = (x - xi) / self.bandwidth;
                (-0.5 * u * u).exp()
            })
            .sum();
        sum * norm
    }

    /// `(x, density)` pairs on `steps` evenly spaced points over `[lo, hi]`.
    pub fn curve(&self, lo: f64, hi: f64, steps: usize) -> Vec<(f64, f64)> {
        crate::grid::linspace(lo, hi, steps)
            .into_iter()
            .map(|x| (x, self.evaluate(x)))
            .collect()
    }
}
