// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the fetch-and-render API.

pub mod axis;
pub mod chart;
pub mod container;
pub mod downsample;
pub mod engine;
pub mod fetch;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod render;
pub mod resolution;
pub mod scale;
pub mod series;
pub mod show;
pub mod text;
pub mod theme;
pub mod threshold;
pub mod time;
pub mod types;

pub use chart::{RenderOptions, SkiaEngine, TimeChart};
pub use container::{ChartContainer, ContainerId, DashboardRegion, Viewport};
pub use engine::{ChartEngine, CoordMap, PlotArea, Underlay, UnderlayCanvas};
pub use fetch::{resolution_url, CsvPayload, FetchOutcome, SeriesFetcher, NO_DATA};
pub use options::GraphOptions;
pub use render::ChartRenderer;
pub use resolution::Resolution;
pub use series::SeriesTable;
pub use show::{show_graph, spawn_graph, SharedRegion};
pub use theme::Theme;
pub use threshold::{ThresholdBand, ThresholdRange};
