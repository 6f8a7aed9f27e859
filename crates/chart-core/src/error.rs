// File: crates/chart-core/src/error.rs
// Summary: Render failure taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart has no series to plot")]
    EmptyChart,

    #[error("series '{label}' has no values")]
    EmptySeries { label: String },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
