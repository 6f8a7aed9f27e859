// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for violin chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod stats;
pub mod crop;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{Violin, ViolinSeries, ViolinShape};
pub use axis::{Axis, CategoryAxis};
pub use theme::Theme;
pub use text::TextShaper;
pub use stats::{Kde, Summary};
pub use error::RenderError;
