// File: crates/response-times/src/main.rs
// Summary: Generates the seeded dataset and writes chart.png to the working directory.

use anyhow::{Context, Result};
use chart_core::stats::median;
use response_times::data::{SAMPLES_PER_GROUP, SEED};
use response_times::{generate, render, seeded_rng, OUTPUT_PATH};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

fn setup_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")
}

fn main() -> Result<()> {
    setup_logging()?;

    let mut rng = seeded_rng(SEED);
    let dataset = generate(&mut rng, SAMPLES_PER_GROUP).context("generating response times")?;
    info!(samples = dataset.len(), seed = SEED, "generated dataset");
    for (channel, values) in dataset.groups() {
        debug!(channel = channel.label(), median = ?median(&values), "group");
    }

    render(&dataset, OUTPUT_PATH).with_context(|| format!("rendering {OUTPUT_PATH}"))?;
    info!("Wrote {OUTPUT_PATH}");
    Ok(())
}
