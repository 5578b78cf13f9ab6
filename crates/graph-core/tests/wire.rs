// File: crates/graph-core/tests/wire.rs
// Purpose: End-to-end fetch-and-render against a canned loopback HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use graph_core::{
    show_graph, ChartContainer, ChartEngine, ChartRenderer, DashboardRegion, GraphOptions,
    Resolution, SeriesFetcher, SharedRegion, ThresholdRange,
};

#[derive(Clone, Debug)]
struct Call {
    csv: String,
    title: String,
    has_underlay: bool,
}

#[derive(Clone, Default)]
struct FakeEngine {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeEngine {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChartEngine for FakeEngine {
    fn draw(&self, container: &mut ChartContainer, csv_text: &str, options: &GraphOptions) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(Call {
            csv: csv_text.to_string(),
            title: options.title.clone(),
            has_underlay: options.underlay.is_some(),
        });
        container.set_png(vec![0u8]);
        Ok(())
    }
}

fn shared_region() -> SharedRegion {
    Arc::new(tokio::sync::Mutex::new(DashboardRegion::default()))
}

/// Serve exactly one canned response; returns the request URL base and a
/// handle yielding the raw request text.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });
    let url = format!("http://{addr}/data/latency?siteID=TAUP&typeID=latency.gnss.1hz");
    (url, handle)
}

#[tokio::test]
async fn success_renders_body_and_keeps_title() {
    let body = "time,latency.mean\n2016-05-10T02:30:00Z,12.5\n2016-05-10T02:31:00Z,11.0\n";
    let (url, server) = serve_once("200 OK", body);

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();
    let options = GraphOptions::titled("TAUP - latency");

    let id = show_graph(
        &region,
        &renderer,
        &SeriesFetcher::new(),
        &url,
        Some(Resolution::FiveMinutes),
        &options,
        None,
    )
    .await
    .unwrap();

    let request = server.join().unwrap();
    assert!(request.contains("&resolution=five_minutes"), "{request}");
    assert!(request.contains("Accept: text/csv") || request.contains("accept: text/csv"), "{request}");

    let calls = engine.calls();
    assert_eq!(calls[0].csv, body);
    assert_eq!(calls[0].title, "TAUP - latency");
    assert!(region.lock().await.get(id).unwrap().png().is_some());
}

#[tokio::test]
async fn resolution_defaults_to_minute() {
    let (url, server) = serve_once("200 OK", "time,v\n100,1.0\n");

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();

    show_graph(&region, &renderer, &SeriesFetcher::new(), &url, None, &GraphOptions::titled("t"), None)
        .await
        .unwrap();

    let request = server.join().unwrap();
    assert!(request.contains("&resolution=minute"), "{request}");
}

#[tokio::test]
async fn empty_body_renders_annotated_fallback() {
    let (url, server) = serve_once("200 OK", "");

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();

    show_graph(&region, &renderer, &SeriesFetcher::new(), &url, None, &GraphOptions::titled("TAUP"), None)
        .await
        .unwrap();
    server.join().unwrap();

    let calls = engine.calls();
    assert_eq!(calls[0].csv, "\n");
    assert_eq!(calls[0].title, "TAUP [Error: No Data Found]");
}

#[tokio::test]
async fn error_status_renders_annotated_fallback() {
    let (url, server) = serve_once("500 Internal Server Error", "boom");

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();

    show_graph(&region, &renderer, &SeriesFetcher::new(), &url, None, &GraphOptions::titled("TAUP"), None)
        .await
        .unwrap();
    server.join().unwrap();

    let calls = engine.calls();
    assert_eq!(calls[0].csv, "\n");
    assert_eq!(calls[0].title, "TAUP [Error fetching data: Internal Server Error]");
}

#[tokio::test]
async fn connection_error_renders_annotated_fallback() {
    // Bind then drop, so the port is very likely unoccupied
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let url = format!("http://{addr}/data/latency?siteID=TAUP");

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();

    // Still renders: the failure is absorbed, never returned
    show_graph(&region, &renderer, &SeriesFetcher::new(), &url, None, &GraphOptions::titled("TAUP"), None)
        .await
        .unwrap();

    let calls = engine.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].csv, "\n");
    assert!(calls[0].title.starts_with("TAUP [Error fetching data: "), "{}", calls[0].title);
    assert_eq!(region.lock().await.len(), 1);
}

#[tokio::test]
async fn thresholds_ride_along_to_the_renderer() {
    let (url, server) = serve_once("200 OK", "time,v\n100,15.0\n200,18.0\n");

    let engine = FakeEngine::default();
    let renderer = ChartRenderer::with_engine(engine.clone());
    let region = shared_region();

    show_graph(
        &region,
        &renderer,
        &SeriesFetcher::new(),
        &url,
        None,
        &GraphOptions::titled("t"),
        Some(ThresholdRange::new(10.0, 20.0)),
    )
    .await
    .unwrap();
    server.join().unwrap();

    let calls = engine.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].has_underlay);
}
