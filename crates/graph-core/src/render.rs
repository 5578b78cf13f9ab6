// File: crates/graph-core/src/render.rs
// Summary: Chart renderer: container placement plus the threshold-band overlay.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::chart::SkiaEngine;
use crate::container::{ContainerId, DashboardRegion};
use crate::engine::ChartEngine;
use crate::options::GraphOptions;
use crate::threshold::{ThresholdBand, ThresholdRange};

/// Draws one chart per call: allocates a fresh container in the region,
/// installs the threshold band when one is requested, and delegates all
/// plotting to the engine.
pub struct ChartRenderer<E = SkiaEngine> {
    engine: E,
}

impl ChartRenderer<SkiaEngine> {
    pub fn new() -> Self {
        Self { engine: SkiaEngine::new() }
    }
}

impl Default for ChartRenderer<SkiaEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ChartEngine> ChartRenderer<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Render CSV text into a new container. When thresholds are given the
    /// engine receives an options copy carrying the band underlay; without
    /// them no hook is installed at all.
    pub fn render(
        &self,
        region: &mut DashboardRegion,
        csv_text: &str,
        options: &GraphOptions,
        thresholds: Option<ThresholdRange>,
    ) -> Result<ContainerId> {
        let options = match thresholds {
            Some(range) => options.with_underlay(Arc::new(ThresholdBand::new(range))),
            None => options.clone(),
        };

        let id = region.append();
        let container = region.get_mut(id).context("freshly appended container")?;
        self.engine.draw(container, csv_text, &options)?;
        Ok(id)
    }
}
