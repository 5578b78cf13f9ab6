// File: crates/graph-core/src/show.rs
// Summary: Caller entry point: fetch a CSV series, annotate, render into the shared region.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::container::{ContainerId, DashboardRegion};
use crate::engine::ChartEngine;
use crate::fetch::SeriesFetcher;
use crate::options::GraphOptions;
use crate::render::ChartRenderer;
use crate::resolution::Resolution;
use crate::threshold::ThresholdRange;

/// The parent region charts append to, shared across in-flight requests.
pub type SharedRegion = Arc<Mutex<DashboardRegion>>;

/// Fetch, collapse, annotate, render: exactly one render per call, for
/// exactly one outcome. The renderer sees an annotated copy of the
/// options; the caller's value is untouched.
pub async fn show_graph<E: ChartEngine>(
    region: &SharedRegion,
    renderer: &ChartRenderer<E>,
    fetcher: &SeriesFetcher,
    csv_url: &str,
    resolution: Option<Resolution>,
    options: &GraphOptions,
    thresholds: Option<ThresholdRange>,
) -> Result<ContainerId> {
    let payload = fetcher.fetch(csv_url, resolution).await.collapse();
    if let Some(annotation) = &payload.annotation {
        warn!(url = csv_url, annotation = annotation.as_str(), "rendering fallback chart");
    }
    let options = options.with_annotated_title(payload.annotation.as_deref());

    let mut region = region.lock().await;
    renderer.render(&mut region, &payload.csv, &options, thresholds)
}

/// Fire-and-forget form: schedules the fetch-and-render on the runtime and
/// returns immediately. Each call owns its options and gets its own
/// container; concurrent calls do not interact.
pub fn spawn_graph(
    region: SharedRegion,
    fetcher: SeriesFetcher,
    csv_url: String,
    resolution: Option<Resolution>,
    options: GraphOptions,
    thresholds: Option<ThresholdRange>,
) -> JoinHandle<Result<ContainerId>> {
    tokio::spawn(async move {
        let renderer = ChartRenderer::new();
        show_graph(&region, &renderer, &fetcher, &csv_url, resolution, &options, thresholds).await
    })
}
