// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub series: [skia::Color; 6],
}

impl Theme {
    /// Default: monitoring pages render on white.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            series: [
                skia::Color::from_argb(255, 32, 120, 200),  // blue
                skia::Color::from_argb(255, 20, 160, 90),   // green
                skia::Color::from_argb(255, 200, 60, 60),   // red
                skia::Color::from_argb(255, 220, 140, 30),  // orange
                skia::Color::from_argb(255, 130, 80, 200),  // purple
                skia::Color::from_argb(255, 30, 160, 170),  // teal
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 240, 170, 60),
                skia::Color::from_argb(255, 170, 120, 240),
                skia::Color::from_argb(255, 60, 200, 210),
            ],
        }
    }

    /// Color for the n-th series, cycling through the palette.
    pub fn series_color(&self, idx: usize) -> skia::Color {
        self.series[idx % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}
