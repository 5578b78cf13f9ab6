// File: crates/graph-core/tests/fetch.rs
// Purpose: Outcome collapse and URL building; pure, no network involved.

use graph_core::{resolution_url, FetchOutcome, GraphOptions, Resolution, NO_DATA};

#[test]
fn default_resolution_is_minute() {
    let url = resolution_url("http://host/data/latency?siteID=TAUP", None);
    assert_eq!(url, "http://host/data/latency?siteID=TAUP&resolution=minute");
}

#[test]
fn every_resolution_lands_in_the_query() {
    for (r, token) in [
        (Resolution::Minute, "minute"),
        (Resolution::FiveMinutes, "five_minutes"),
        (Resolution::Hour, "hour"),
    ] {
        let url = resolution_url("http://host/p?x=1", Some(r));
        assert!(url.contains(&format!("&resolution={token}")), "{url}");
    }
}

#[test]
fn success_with_body_passes_through() {
    let body = "time,latency.mean\n2016-05-10T02:30:00Z,12.5\n".to_string();
    let payload = FetchOutcome::Success(body.clone()).collapse();
    assert_eq!(payload.csv, body);
    assert_eq!(payload.annotation, None);
}

#[test]
fn empty_body_becomes_no_data_marker() {
    let payload = FetchOutcome::Success(String::new()).collapse();
    assert_eq!(payload.csv, NO_DATA);
    assert_eq!(payload.annotation.as_deref(), Some(" [Error: No Data Found]"));
}

#[test]
fn http_error_carries_status_text() {
    let payload = FetchOutcome::HttpError {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    }
    .collapse();
    assert_eq!(payload.csv, NO_DATA);
    assert_eq!(
        payload.annotation.as_deref(),
        Some(" [Error fetching data: Internal Server Error]")
    );
}

#[test]
fn transport_error_matches_http_error_shape() {
    let payload = FetchOutcome::TransportError("Connection Error".to_string()).collapse();
    assert_eq!(payload.csv, NO_DATA);
    assert_eq!(
        payload.annotation.as_deref(),
        Some(" [Error fetching data: Connection Error]")
    );
}

#[test]
fn annotation_appends_to_the_title_exactly_once() {
    let options = GraphOptions::titled("TAUP - latency.gnss.1hz");
    let payload = FetchOutcome::Success(String::new()).collapse();
    let annotated = options.with_annotated_title(payload.annotation.as_deref());
    assert_eq!(annotated.title, "TAUP - latency.gnss.1hz [Error: No Data Found]");
    // caller's options are untouched
    assert_eq!(options.title, "TAUP - latency.gnss.1hz");
}
