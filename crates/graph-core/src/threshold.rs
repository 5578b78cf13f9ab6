// File: crates/graph-core/src/threshold.rs
// Summary: Threshold band underlay: a translucent grey box over the acceptable value range.

use skia_safe as skia;

use crate::engine::{CoordMap, PlotArea, Underlay, UnderlayCanvas};

/// Y-axis value pair bounding the shaded band. The pair is not required
/// to be ordered; the band is normalized in pixel space at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdRange {
    pub lower: f64,
    pub upper: f64,
}

impl ThresholdRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Fixed fill for the band: rgba(200, 200, 200, 0.5).
pub fn band_fill() -> skia::Color {
    skia::Color::from_argb(128, 200, 200, 200)
}

/// Full-width pixel rectangle between two converted Y coordinates.
/// Order-insensitive: pixel Y is inverted relative to value Y, so the
/// smaller pixel coordinate is always the top edge.
pub fn band_rect(area: &PlotArea, py_a: f32, py_b: f32) -> (f32, f32, f32, f32) {
    (area.left, py_a.min(py_b), area.right, py_a.max(py_b))
}

/// Underlay shading the threshold band beneath the data series.
pub struct ThresholdBand {
    range: ThresholdRange,
}

impl ThresholdBand {
    pub fn new(range: ThresholdRange) -> Self {
        Self { range }
    }
}

impl Underlay for ThresholdBand {
    fn draw(&self, canvas: &mut dyn UnderlayCanvas, area: &PlotArea, map: &dyn CoordMap) {
        // Only the Y conversion matters; X is pinned to the plot edges
        let (_, py_lower) = map.to_pixel(0.0, self.range.lower);
        let (_, py_upper) = map.to_pixel(0.0, self.range.upper);
        let (l, t, r, b) = band_rect(area, py_lower, py_upper);
        canvas.fill_rect(l, t, r, b, band_fill());
    }
}
