// File: crates/graph-core/src/options.rs
// Summary: Caller-facing chart configuration; annotation is a pure transformation.

use std::sync::Arc;

use crate::engine::Underlay;
use crate::theme::Theme;

/// Default per-series point budget before LTTB kicks in.
pub const DEFAULT_DOWNSAMPLE: usize = 1500;

/// Configuration for one chart. Owned by the caller and never mutated by
/// the pipeline: error annotation produces a new value via
/// [`GraphOptions::with_annotated_title`].
#[derive(Clone)]
pub struct GraphOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Override CSV header series names, in column order.
    pub labels: Option<Vec<String>>,
    pub theme: Theme,
    /// Titles, axis labels, ticks and legend. Disable for deterministic
    /// pixel output in tests.
    pub draw_labels: bool,
    /// Per-series point budget; None disables downsampling.
    pub downsample_to: Option<usize>,
    /// Custom draw layer beneath the series (threshold band et al).
    pub underlay: Option<Arc<dyn Underlay>>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Time".to_string(),
            y_label: "Latency (ms)".to_string(),
            labels: None,
            theme: Theme::default(),
            draw_labels: true,
            downsample_to: Some(DEFAULT_DOWNSAMPLE),
            underlay: None,
        }
    }
}

impl GraphOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Copy with the annotation appended to the title. No-op for None.
    pub fn with_annotated_title(&self, annotation: Option<&str>) -> Self {
        let mut out = self.clone();
        if let Some(a) = annotation {
            out.title.push_str(a);
        }
        out
    }

    /// Copy with the given underlay installed.
    pub fn with_underlay(&self, underlay: Arc<dyn Underlay>) -> Self {
        Self { underlay: Some(underlay), ..self.clone() }
    }
}
