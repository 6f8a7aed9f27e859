// File: crates/response-times/src/lib.rs
// Summary: Synthetic customer-support response times and their violin chart.

pub mod data;
pub mod figure;

pub use data::{generate, seeded_rng, Channel, Dataset, GenerateError, GroupParams, Sample};
pub use figure::{build_chart, render, OUTPUT_PATH};
