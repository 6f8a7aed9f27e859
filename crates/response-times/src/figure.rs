// File: crates/response-times/src/figure.rs
// Summary: Turns a generated dataset into the annotated violin chart and writes it.

use std::path::Path;

use chart_core::{Axis, CategoryAxis, Chart, RenderError, RenderOptions, ViolinSeries};

use crate::data::{Dataset, VALUE_MAX};

/// Output file, relative to the working directory.
pub const OUTPUT_PATH: &str = "chart.png";

pub const TITLE: &str = "Customer Support Response Time by Channel";
pub const X_LABEL: &str = "Support Channel";
pub const Y_LABEL: &str = "Response Time (minutes)";

/// Footnote stating the total sample count.
pub fn footnote(n: usize) -> String {
    format!("Synthetic data for demonstration (n = {n}).")
}

/// One violin per channel, fixed [0, 120] value axis, title and footnote.
pub fn build_chart(dataset: &Dataset) -> Chart {
    let mut chart = Chart::new();
    chart.title = TITLE.to_string();
    chart.x_axis = CategoryAxis::new(X_LABEL);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, VALUE_MAX);
    for (channel, values) in dataset.groups() {
        chart.add_series(ViolinSeries::new(channel.label(), values));
    }
    chart.footnote = Some(footnote(dataset.len()));
    chart
}

/// Build and render `dataset` to `path` with the default 512x512 layout.
pub fn render(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), RenderError> {
    build_chart(dataset).render_to_png(&RenderOptions::default(), path)
}
