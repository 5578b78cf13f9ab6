// File: crates/graph-demo/src/main.rs
// Summary: Demo fetches latency CSV series from a metrics endpoint and writes chart PNGs.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use graph_core::{
    spawn_graph, DashboardRegion, GraphOptions, Resolution, SeriesFetcher, SharedRegion,
    ThresholdRange, Viewport,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept endpoint and resolution from CLI or fall back to a local server
    let url = std::env::args().nth(1).unwrap_or_else(|| {
        "http://localhost:8080/data/latency?siteID=TAUP&typeID=latency.gnss.1hz".to_string()
    });
    let resolution = match std::env::args().nth(2) {
        Some(token) => Some(token.parse::<Resolution>()?),
        None => None,
    };
    let thresholds = parse_thresholds(std::env::args().nth(3), std::env::args().nth(4))?;

    let region: SharedRegion = Arc::new(tokio::sync::Mutex::new(DashboardRegion::new(Viewport::default())));
    let fetcher = SeriesFetcher::new();

    info!(url = url.as_str(), "requesting chart");
    let mut handles = vec![spawn_graph(
        region.clone(),
        fetcher.clone(),
        url.clone(),
        resolution,
        GraphOptions::titled("Latency"),
        None,
    )];
    if thresholds.is_some() {
        // Second chart of the same series with the acceptable band shaded
        handles.push(spawn_graph(
            region.clone(),
            fetcher.clone(),
            url,
            resolution,
            GraphOptions::titled("Latency (threshold band)"),
            thresholds,
        ));
    }
    for handle in handles {
        handle.await??;
    }

    let region = region.lock().await;
    for (i, container) in region.containers().iter().enumerate() {
        let out = PathBuf::from("target/out").join(format!("latency_{i}.png"));
        container.save(&out).with_context(|| format!("writing {}", out.display()))?;
        info!(path = %out.display(), "wrote chart");
    }
    Ok(())
}

fn parse_thresholds(lower: Option<String>, upper: Option<String>) -> Result<Option<ThresholdRange>> {
    match (lower, upper) {
        (Some(lo), Some(hi)) => {
            let lo = lo.parse::<f64>().context("lower threshold")?;
            let hi = hi.parse::<f64>().context("upper threshold")?;
            Ok(Some(ThresholdRange::new(lo, hi)))
        }
        _ => Ok(None),
    }
}
