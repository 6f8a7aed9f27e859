// File: crates/chart-core/src/series.rs
// Summary: Violin series model: one labeled group of samples and its density outline.

use crate::stats::{Kde, Summary};

/// Density evaluation points per violin.
pub const GRIDSIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct ViolinSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Precomputed violin geometry in data space.
#[derive(Clone, Debug, PartialEq)]
pub enum ViolinShape {
    /// `(value, density)` over exactly [min, max] of the data.
    Density(Vec<(f64, f64)>),
    /// Zero-spread group: all samples share one value.
    Flat(f64),
}

/// Outline plus the quartiles drawn inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Violin {
    pub shape: ViolinShape,
    pub summary: Summary,
}

impl ViolinShape {
    /// Largest density value (0 for flat shapes).
    pub fn peak(&self) -> f64 {
        match self {
            ViolinShape::Density(curve) => curve.iter().map(|&(_, d)| d).fold(0.0, f64::max),
            ViolinShape::Flat(_) => 0.0,
        }
    }

    /// Density at `y`, linearly interpolated along the curve; 0 outside it.
    pub fn density_at(&self, y: f64) -> f64 {
        let ViolinShape::Density(curve) = self else { return 0.0 };
        for w in curve.windows(2) {
            let ((y0, d0), (y1, d1)) = (w[0], w[1]);
            if y >= y0 && y <= y1 {
                let t = if y1 > y0 { (y - y0) / (y1 - y0) } else { 0.0 };
                return d0 + t * (d1 - d0);
            }
        }
        0.0
    }
}

impl ViolinSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Quartile summary, `None` for an empty series.
    pub fn summary(&self) -> Option<Summary> {
        Summary::of(&self.values)
    }

    /// Density outline cut at the data extremes, with its summary;
    /// `None` for an empty series.
    pub fn violin(&self) -> Option<Violin> {
        let summary = self.summary()?;
        let shape = match Kde::fit(&self.values) {
            Some(kde) => ViolinShape::Density(kde.curve(summary.min, summary.max, GRIDSIZE)),
            None => ViolinShape::Flat(summary.median),
        };
        Some(Violin { shape, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_cut_at_data_range() {
        let s = ViolinSeries::new("g", vec![1.0, 2.0, 2.5, 3.0, 7.0]);
        let violin = s.violin().unwrap();
        assert_eq!((violin.summary.min, violin.summary.max), (1.0, 7.0));
        let ViolinShape::Density(curve) = violin.shape else { panic!("expected density") };
        assert_eq!(curve.len(), GRIDSIZE);
        assert_eq!(curve.first().unwrap().0, 1.0);
        assert!((curve.last().unwrap().0 - 7.0).abs() < 1e-12);
        assert!(curve.iter().all(|&(_, d)| d > 0.0));
    }

    #[test]
    fn constant_series_is_flat() {
        let s = ViolinSeries::new("g", vec![4.0; 5]);
        let shape = s.violin().unwrap().shape;
        assert_eq!(shape, ViolinShape::Flat(4.0));
        assert_eq!(shape.peak(), 0.0);
        assert_eq!(shape.density_at(4.0), 0.0);
    }

    #[test]
    fn density_at_interpolates_inside_only() {
        let shape = ViolinShape::Density(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(shape.density_at(0.5), 0.5);
        assert_eq!(shape.density_at(3.0), 0.0);
        assert_eq!(shape.peak(), 1.0);
    }

    #[test]
    fn empty_series_has_no_shape() {
        let s = ViolinSeries::new("g", Vec::new());
        assert!(s.is_empty());
        assert!(s.violin().is_none());
        assert!(s.summary().is_none());
    }
}
