// File: crates/graph-core/src/series.rs
// Summary: Parsed time-series table: header row names the series, first column is time.

use crate::downsample::lttb;
use crate::time::parse_timestamp;

/// One column of series data per name, each a list of (epoch_sec, value)
/// points. Parsing never fails: the empty "no data" payload and rows that
/// do not parse both degrade to fewer points, not errors.
#[derive(Clone, Debug, Default)]
pub struct SeriesTable {
    pub names: Vec<String>,
    pub points: Vec<Vec<(f64, f64)>>,
}

impl SeriesTable {
    /// Parse CSV text. Header row gives series names (first column is the
    /// time column and is not a series). A bare newline, an empty string,
    /// or a lone header row all yield an empty table.
    pub fn parse(csv_text: &str) -> Self {
        let trimmed = csv_text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(trimmed.as_bytes());

        let names: Vec<String> = match rdr.headers() {
            Ok(h) => h.iter().skip(1).map(str::to_string).collect(),
            Err(_) => return Self::default(),
        };
        let mut points = vec![Vec::new(); names.len()];

        for rec in rdr.records() {
            let Ok(rec) = rec else { continue };
            let Some(t) = rec.get(0).and_then(parse_timestamp) else { continue };
            for (i, col) in points.iter_mut().enumerate() {
                if let Some(v) = rec.get(i + 1).and_then(|c| c.parse::<f64>().ok()) {
                    if v.is_finite() {
                        col.push((t, v));
                    }
                }
            }
        }

        Self { names, points }
    }

    /// True when no series has any points (the "no data" render state).
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.is_empty())
    }

    pub fn series_count(&self) -> usize {
        self.names.len()
    }

    /// Replace series names with caller-supplied labels, up to the number
    /// of series present.
    pub fn with_names(mut self, labels: &[String]) -> Self {
        for (name, label) in self.names.iter_mut().zip(labels) {
            *name = label.clone();
        }
        self
    }

    /// Downsample every series to at most `max_points` with LTTB.
    pub fn downsampled(mut self, max_points: usize) -> Self {
        if max_points >= 2 {
            for col in &mut self.points {
                if col.len() > max_points {
                    *col = lttb(col, max_points);
                }
            }
        }
        self
    }

    /// Overall time extent across all series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(x, _) in self.points.iter().flatten() {
            lo = lo.min(x);
            hi = hi.max(x);
        }
        (lo <= hi).then_some((lo, hi))
    }

    /// Overall value extent across all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, y) in self.points.iter().flatten() {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        (lo <= hi).then_some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesTable;

    const CSV: &str = "time,latency.mean,latency.ninety\n\
                       2016-05-10T02:30:00Z,12.5,30.0\n\
                       2016-05-10T02:31:00Z,11.0,28.5\n";

    #[test]
    fn parses_header_and_rows() {
        let t = SeriesTable::parse(CSV);
        assert_eq!(t.names, vec!["latency.mean", "latency.ninety"]);
        assert_eq!(t.points[0].len(), 2);
        assert_eq!(t.points[1][1], (1462847460.0, 28.5));
        assert!(!t.is_empty());
    }

    #[test]
    fn newline_marker_is_empty_not_an_error() {
        let t = SeriesTable::parse("\n");
        assert!(t.is_empty());
        assert_eq!(t.series_count(), 0);
    }

    #[test]
    fn lone_header_renders_as_no_data() {
        let t = SeriesTable::parse("time,latency\n");
        assert_eq!(t.names, vec!["latency"]);
        assert!(t.is_empty());
    }

    #[test]
    fn bad_rows_are_skipped() {
        let csv = "time,v\nnot-a-time,1.0\n2016-05-10T02:30:00Z,oops\n2016-05-10T02:31:00Z,4.5\n";
        let t = SeriesTable::parse(csv);
        assert_eq!(t.points[0], vec![(1462847460.0, 4.5)]);
    }

    #[test]
    fn short_rows_leave_gaps() {
        let csv = "time,a,b\n2016-05-10T02:30:00Z,1.0\n2016-05-10T02:31:00Z,2.0,3.0\n";
        let t = SeriesTable::parse(csv);
        assert_eq!(t.points[0].len(), 2);
        assert_eq!(t.points[1].len(), 1);
    }

    #[test]
    fn ranges_span_all_series() {
        let t = SeriesTable::parse(CSV);
        assert_eq!(t.x_range(), Some((1462847400.0, 1462847460.0)));
        assert_eq!(t.y_range(), Some((11.0, 30.0)));
    }

    #[test]
    fn label_override_applies_in_order() {
        let t = SeriesTable::parse(CSV).with_names(&["mean".to_string()]);
        assert_eq!(t.names, vec!["mean", "latency.ninety"]);
    }
}
