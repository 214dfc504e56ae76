//! netmetrics-chart - Degree Distribution & Network Metrics Chart Generator
//!
//! Reads `DegreeDistribution.csv` and `NetworkMetrics.csv` from the working
//! directory, composes the chart, writes `DegreeDistributionAndMetrics.png`
//! at 300 DPI and opens it with the system image viewer.

use std::path::Path;

use anyhow::Context;

use netmetrics_chart::charts::render_figure;
use netmetrics_chart::data::{load_rows, load_series};

const DEGREE_DISTRIBUTION_CSV: &str = "DegreeDistribution.csv";
const NETWORK_METRICS_CSV: &str = "NetworkMetrics.csv";
const OUTPUT_PNG: &str = "DegreeDistributionAndMetrics.png";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let series = load_series(Path::new(DEGREE_DISTRIBUTION_CSV))
        .context("failed to load degree distribution data")?;
    log::info!("Loaded {} degree distribution points", series.len());

    let metrics = load_rows(Path::new(NETWORK_METRICS_CSV))
        .context("failed to load network metrics")?;
    log::info!("Loaded {} metric rows", metrics.len());

    render_figure(&series, &metrics, Path::new(OUTPUT_PNG))
        .context("failed to render chart")?;
    log::info!("Saved chart to {}", OUTPUT_PNG);

    // Counterpart of an interactive show: hand the image to the system
    // viewer. A headless environment is not an error.
    if let Err(err) = open::that(OUTPUT_PNG) {
        log::warn!("Could not open image viewer: {}", err);
    }

    Ok(())
}
