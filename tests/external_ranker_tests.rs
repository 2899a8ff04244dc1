//! ExternalRanker transport behavior against a local HTTP stub.
//!
//! The success path runs against a one-shot `TcpListener` serving a canned
//! HTTP response; failure paths use loopback ports with nothing listening.
//! No test here leaves the machine.

use annolink::{Candidate, ExternalRanker, Ranker, RankingRequest};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

fn request() -> RankingRequest {
    RankingRequest::new(
        "Paris",
        "Paris is a city.",
        vec![
            Candidate::new("Q1", "Paris, Texas"),
            Candidate::new("Q2", "Paris"),
        ],
    )
}

fn ids(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.id.as_str()).collect()
}

/// Port on loopback with nothing listening: bind, read the port, drop.
fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("addr").port()
}

/// Serve exactly one request with the given status line and JSON body.
fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        // Drain the request: headers, then Content-Length body bytes.
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0);
        while data.len() < header_end + content_length {
            let n = stream.read(&mut buf).expect("read body");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
    });

    format!("http://{addr}/rank")
}

#[test]
fn applies_scores_from_a_healthy_endpoint() {
    let endpoint = spawn_stub(
        "HTTP/1.1 200 OK",
        r#"{"scores":[{"id":"Q2","score":0.9},{"id":"Q1","score":0.1}]}"#,
    );
    let ranker = ExternalRanker::with_timeout(endpoint, Duration::from_secs(5));

    let ranked = ranker.rank(&request());
    assert_eq!(ids(&ranked), ["Q2", "Q1"]);
    assert_eq!(ranked[0].score, Some(0.9));
}

#[test]
fn connection_refused_degrades_to_input_order() {
    let endpoint = format!("http://127.0.0.1:{}/rank", refused_port());
    let ranker = ExternalRanker::with_timeout(endpoint, Duration::from_secs(2));

    let ranked = ranker.rank(&request());
    assert_eq!(ids(&ranked), ["Q1", "Q2"]);
    assert!(ranked.iter().all(|c| c.score.is_none()));
}

#[test]
fn server_error_degrades_to_input_order() {
    let endpoint = spawn_stub("HTTP/1.1 500 Internal Server Error", "{}");
    let ranker = ExternalRanker::with_timeout(endpoint, Duration::from_secs(5));

    let ranked = ranker.rank(&request());
    assert_eq!(ids(&ranked), ["Q1", "Q2"]);
}

#[test]
fn malformed_body_degrades_to_input_order() {
    let endpoint = spawn_stub("HTTP/1.1 200 OK", "this is not json");
    let ranker = ExternalRanker::with_timeout(endpoint, Duration::from_secs(5));

    let ranked = ranker.rank(&request());
    assert_eq!(ids(&ranked), ["Q1", "Q2"]);
}

#[test]
fn unknown_ids_in_response_are_ignored() {
    let endpoint = spawn_stub(
        "HTTP/1.1 200 OK",
        r#"{"scores":[{"id":"Q404","score":1.0}]}"#,
    );
    let ranker = ExternalRanker::with_timeout(endpoint, Duration::from_secs(5));

    let ranked = ranker.rank(&request());
    assert_eq!(ids(&ranked), ["Q1", "Q2"]);
}

#[test]
fn endpoint_is_observable() {
    let ranker = ExternalRanker::new("http://localhost:5000/rank");
    assert_eq!(ranker.endpoint(), "http://localhost:5000/rank");
}
