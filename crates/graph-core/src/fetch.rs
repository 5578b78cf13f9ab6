// File: crates/graph-core/src/fetch.rs
// Summary: CSV series fetcher; transport and data-absence failures collapse into a renderable fallback.

use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::resolution::Resolution;

/// Canonical empty-but-valid CSV payload: one newline, no data rows.
pub const NO_DATA: &str = "\n";

/// Terminal outcome of one fetch. Exactly one variant is produced per
/// request; none of them is an error to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP success status; body as received (possibly empty).
    Success(String),
    /// A response arrived, but its status indicates failure.
    HttpError { status: u16, status_text: String },
    /// No response at all.
    TransportError(String),
}

/// Renderable CSV text plus the title annotation the outcome earned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvPayload {
    pub csv: String,
    pub annotation: Option<String>,
}

impl FetchOutcome {
    /// Collapse into something the renderer can always draw: real CSV on
    /// success, otherwise the "no data" marker plus a human-readable title
    /// annotation. The dashboard never shows a crashed widget, only an
    /// annotated empty one.
    pub fn collapse(self) -> CsvPayload {
        match self {
            FetchOutcome::Success(body) if !body.is_empty() => CsvPayload { csv: body, annotation: None },
            FetchOutcome::Success(_) => CsvPayload {
                csv: NO_DATA.to_string(),
                annotation: Some(" [Error: No Data Found]".to_string()),
            },
            FetchOutcome::HttpError { status_text, .. } => CsvPayload {
                csv: NO_DATA.to_string(),
                annotation: Some(format!(" [Error fetching data: {status_text}]")),
            },
            FetchOutcome::TransportError(reason) => CsvPayload {
                csv: NO_DATA.to_string(),
                annotation: Some(format!(" [Error fetching data: {reason}]")),
            },
        }
    }
}

/// Append the resolution token the way the metrics endpoint expects.
/// The URL is assumed to already carry a query string.
pub fn resolution_url(url: &str, resolution: Option<Resolution>) -> String {
    format!("{}&resolution={}", url, resolution.unwrap_or_default())
}

/// HTTP client for CSV time series.
#[derive(Clone)]
pub struct SeriesFetcher {
    client: reqwest::Client,
}

impl SeriesFetcher {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }

    /// Use a preconfigured client (proxies, custom TLS).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// GET the series at the given resolution, accepting CSV. Transport
    /// and HTTP failures are absorbed into the outcome, never returned as
    /// errors; each is logged at warn level.
    pub async fn fetch(&self, url: &str, resolution: Option<Resolution>) -> FetchOutcome {
        let url = resolution_url(url, resolution);
        debug!(url = url.as_str(), "fetching series");

        let resp = match self.client.get(&url).header(ACCEPT, "text/csv").send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url = url.as_str(), error = %e, "connection error fetching series");
                return FetchOutcome::TransportError(transport_reason(&e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            warn!(url = url.as_str(), status = status.as_u16(), "series endpoint returned error status");
            return FetchOutcome::HttpError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
            };
        }

        match resp.text().await {
            Ok(body) => FetchOutcome::Success(body),
            Err(e) => {
                warn!(url = url.as_str(), error = %e, "failed reading series body");
                FetchOutcome::TransportError(transport_reason(&e))
            }
        }
    }
}

impl Default for SeriesFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Best available status text for a request that got no response.
fn transport_reason(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Timed Out".to_string()
    } else if e.is_connect() {
        "Connection Error".to_string()
    } else {
        "No Response".to_string()
    }
}
