// File: crates/graph-core/src/engine.rs
// Summary: Chart engine capability boundary and the underlay hook API.

use anyhow::Result;
use skia_safe as skia;

use crate::container::ChartContainer;
use crate::options::GraphOptions;

/// Pixel-space bounds of the plot's drawing area, valid for one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Chart-space to pixel-space conversion supplied by the engine mid-draw.
/// Pixel Y grows downward, so a larger data Y maps to a smaller pixel Y.
pub trait CoordMap {
    fn to_pixel(&self, x: f64, y: f64) -> (f32, f32);
}

/// Minimal pixel-space drawing surface exposed to underlay hooks.
pub trait UnderlayCanvas {
    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: skia::Color);
}

/// Draw layer rendered beneath the data series. Called synchronously by
/// the engine once scales are computed, on every draw; coordinates must be
/// converted at draw time because axis ranges change with data.
pub trait Underlay: Send + Sync {
    fn draw(&self, canvas: &mut dyn UnderlayCanvas, area: &PlotArea, map: &dyn CoordMap);
}

/// Capability: given CSV text and options, draw a chart into a container.
/// Implementations parse the CSV themselves; the single-newline "no data"
/// payload must render as an empty chart, never fail.
pub trait ChartEngine {
    fn draw(&self, container: &mut ChartContainer, csv_text: &str, options: &GraphOptions) -> Result<()>;
}
