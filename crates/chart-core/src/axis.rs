// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }
}

/// Categorical axis: only a title; categories come from the series labels.
#[derive(Clone, Debug)]
pub struct CategoryAxis {
    pub label: String,
}

impl CategoryAxis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self::new("Group")
    }
}
