// File: crates/graph-core/src/chart.rs
// Summary: TimeChart model and headless Skia raster pipeline implementing the chart engine.

use std::sync::Arc;

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::container::ChartContainer;
use crate::engine::{ChartEngine, CoordMap, PlotArea, Underlay, UnderlayCanvas};
use crate::grid::linspace;
use crate::options::GraphOptions;
use crate::scale::LinearScale;
use crate::series::SeriesTable;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::time::format_tick;
use crate::types::{Insets, HEIGHT, WIDTH};

const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { width, height, insets: Insets::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::sized(WIDTH, HEIGHT)
    }
}

/// One chart's worth of parsed data plus everything needed to draw it.
pub struct TimeChart {
    pub table: SeriesTable,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: String,
    pub theme: Theme,
    pub draw_labels: bool,
    pub underlay: Option<Arc<dyn Underlay>>,
}

impl TimeChart {
    /// Build from CSV text. The "no data" payload yields an empty chart
    /// with unit axis ranges; it still renders.
    pub fn from_csv(csv_text: &str, options: &GraphOptions) -> Self {
        let mut table = SeriesTable::parse(csv_text);
        if let Some(labels) = &options.labels {
            table = table.with_names(labels);
        }
        if let Some(budget) = options.downsample_to {
            table = table.downsampled(budget);
        }
        let mut chart = Self {
            table,
            x_axis: Axis::new(options.x_label.clone(), 0.0, 1.0),
            y_axis: Axis::new(options.y_label.clone(), 0.0, 1.0),
            title: options.title.clone(),
            theme: options.theme,
            draw_labels: options.draw_labels,
            underlay: options.underlay.clone(),
        };
        chart.autoscale_axes(0.02);
        chart
    }

    /// Fit axis ranges to the data, padding Y by `y_margin` of its span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        match self.table.x_range() {
            Some((lo, mut hi)) => {
                if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
                self.x_axis.min = lo;
                self.x_axis.max = hi;
            }
            None => {
                self.x_axis.min = 0.0;
                self.x_axis.max = 1.0;
            }
        }
        match self.table.y_range() {
            Some((lo, mut hi)) => {
                if (hi - lo).abs() < 1e-9 { hi = lo + 1.0; }
                let m = (hi - lo) * y_margin;
                self.y_axis.min = lo - m;
                self.y_axis.max = hi + m;
            }
            None => {
                self.y_axis.min = 0.0;
                self.y_axis.max = 1.0;
            }
        }
    }

    fn plot_area(&self, opts: &RenderOptions) -> PlotArea {
        PlotArea {
            left: opts.insets.left as f32,
            top: opts.insets.top as f32,
            right: (opts.width - opts.insets.right) as f32,
            bottom: (opts.height - opts.insets.bottom) as f32,
        }
    }

    fn draw_into(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(self.theme.background);

        let plot = self.plot_area(opts);
        let sx = LinearScale::new(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot.bottom, plot.top, self.y_axis.min, self.y_axis.max);

        // Underlay first: beneath grid and series, converted at draw time
        if let Some(hook) = &self.underlay {
            let map = ScaleMap { sx, sy };
            let mut fill = CanvasFill { canvas };
            hook.draw(&mut fill, &plot, &map);
        }

        draw_grid(canvas, &plot, self.theme.grid);
        draw_axis_lines(canvas, &plot, self.theme.axis_line);

        for (i, col) in self.table.points.iter().enumerate() {
            draw_series_line(canvas, col, &sx, &sy, self.theme.series_color(i));
        }

        if self.draw_labels {
            self.draw_text_layer(canvas, opts, &plot, &sx, &sy);
        }
    }

    fn draw_text_layer(&self, canvas: &skia::Canvas, opts: &RenderOptions, plot: &PlotArea, sx: &LinearScale, sy: &LinearScale) {
        let shaper = TextShaper::new();
        let th = &self.theme;

        if !self.title.is_empty() {
            shaper.draw_centered(canvas, &self.title, opts.width as f32 * 0.5, 22.0, 16.0, th.axis_label);
        }
        shaper.draw_left(canvas, &self.x_axis.label, plot.right - 60.0, plot.bottom + 36.0, 13.0, th.axis_label, false);
        shaper.draw_left(canvas, &self.y_axis.label, 8.0, plot.top + 6.0, 13.0, th.axis_label, false);

        let span = self.x_axis.max - self.x_axis.min;
        for v in linspace(self.x_axis.min, self.x_axis.max, X_TICKS) {
            shaper.draw_left(canvas, &format_tick(v, span), sx.to_px(v) - 14.0, plot.bottom + 18.0, 11.0, th.tick, true);
        }
        for v in linspace(self.y_axis.min, self.y_axis.max, Y_TICKS) {
            shaper.draw_right(canvas, &format_value(v), plot.left - 6.0, sy.to_px(v) + 4.0, 11.0, th.tick, true);
        }

        // Legend: swatch + series name rows inside the top-left of the plot
        let mut ly = plot.top + 16.0;
        for (i, name) in self.table.names.iter().enumerate() {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(th.series_color(i));
            canvas.draw_rect(skia::Rect::from_ltrb(plot.left + 6.0, ly - 9.0, plot.left + 18.0, ly - 3.0), &paint);
            shaper.draw_left(canvas, name, plot.left + 24.0, ly, 12.0, th.axis_label, false);
            ly += 16.0;
        }
    }

    /// Render to a raw RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_into(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back pixels");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw_into(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a PNG to `path`, creating parent directories as needed.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// The shipped engine: rasterize into the container's rect with Skia.
pub struct SkiaEngine;

impl SkiaEngine {
    pub fn new() -> Self { Self }
}

impl Default for SkiaEngine {
    fn default() -> Self { Self::new() }
}

impl ChartEngine for SkiaEngine {
    fn draw(&self, container: &mut ChartContainer, csv_text: &str, options: &GraphOptions) -> Result<()> {
        let chart = TimeChart::from_csv(csv_text, options);
        let opts = RenderOptions::sized(container.rect().width(), container.rect().height());
        let png = chart.render_to_png_bytes(&opts)?;
        container.set_png(png);
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct ScaleMap {
    sx: LinearScale,
    sy: LinearScale,
}

impl CoordMap for ScaleMap {
    fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        (self.sx.to_px(x), self.sy.to_px(y))
    }
}

struct CanvasFill<'a> {
    canvas: &'a skia::Canvas,
}

impl UnderlayCanvas for CanvasFill<'_> {
    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        self.canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &paint);
    }
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotArea, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(plot.left as f64, plot.right as f64, X_TICKS) {
        canvas.draw_line((x as f32, plot.top), (x as f32, plot.bottom), &paint);
    }
    for y in linspace(plot.top as f64, plot.bottom as f64, Y_TICKS) {
        canvas.draw_line((plot.left, y as f32), (plot.right, y as f32), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: &PlotArea, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
}

fn draw_series_line(canvas: &skia::Canvas, data: &[(f64, f64)], sx: &LinearScale, sy: &LinearScale, color: skia::Color) {
    if data.is_empty() {
        return;
    }

    if data.len() == 1 {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        let (x, y) = data[0];
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), 2.5, &fill);
        return;
    }

    let mut builder = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    builder.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in &data[1..] {
        builder.line_to((sx.to_px(x), sy.to_px(y)));
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

fn format_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
