//! Integration tests for the suggestion client against a local HTTP server.
//!
//! The server runs on its own thread with its own runtime so the blocking
//! client can be exercised from plain synchronous tests.

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use marquee::{MarqueeError, SuggestClient};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::time::Duration;
use url::Url;

fn spawn_server(router: Router) -> SocketAddr {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind test listener");
            tx.send(listener.local_addr().expect("listener addr"))
                .expect("report addr");
            axum::serve(listener, router).await.expect("serve");
        });
    });

    rx.recv().expect("server address")
}

fn client_for(addr: SocketAddr) -> SuggestClient {
    let server = Url::parse(&format!("http://{addr}")).expect("server url");
    SuggestClient::new(&server, Duration::from_secs(5)).expect("client")
}

async fn echo_suggestions(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    Json(json!([
        { "title": format!("{q} Reloaded"), "url": format!("/movie/{q}/2") },
        { "title": q, "url": "/movie/1" },
    ]))
}

#[test]
fn fetches_suggestions_and_preserves_server_order() {
    let router = Router::new().route("/search_autocomplete", get(echo_suggestions));
    let addr = spawn_server(router);
    let client = client_for(addr);

    let suggestions = client.fetch_suggestions("Matrix").expect("fetch");

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].title, "Matrix Reloaded");
    assert_eq!(suggestions[0].url, "/movie/Matrix/2");
    assert_eq!(suggestions[1].title, "Matrix");
    assert_eq!(suggestions[1].url, "/movie/1");
}

#[test]
fn query_round_trips_through_url_encoding() {
    let router = Router::new().route("/search_autocomplete", get(echo_suggestions));
    let addr = spawn_server(router);
    let client = client_for(addr);

    let query = "blade runner & friends?";
    let suggestions = client.fetch_suggestions(query).expect("fetch");

    // The server saw the query decoded back to the original text
    assert_eq!(suggestions[1].title, query);
}

#[test]
fn empty_array_yields_an_empty_vec() {
    let router = Router::new().route(
        "/search_autocomplete",
        get(|| async { Json(json!([])) }),
    );
    let addr = spawn_server(router);
    let client = client_for(addr);

    let suggestions = client.fetch_suggestions("nothing").expect("fetch");
    assert!(suggestions.is_empty());
}

#[test]
fn non_success_status_is_a_status_error() {
    let router = Router::new().route(
        "/search_autocomplete",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_server(router);
    let client = client_for(addr);

    let err = client.fetch_suggestions("matrix").unwrap_err();
    match err {
        MarqueeError::Status(code) => assert_eq!(code, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(
        "/search_autocomplete",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{ not json") }),
    );
    let addr = spawn_server(router);
    let client = client_for(addr);

    let err = client.fetch_suggestions("matrix").unwrap_err();
    assert!(matches!(err, MarqueeError::Decode(_)), "got {err:?}");
}

#[test]
fn connection_failure_is_a_transport_error() {
    // Bind a port, then drop the listener so nothing is there
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr")
    };
    let client = client_for(addr);

    let err = client.fetch_suggestions("matrix").unwrap_err();
    assert!(matches!(err, MarqueeError::Transport(_)), "got {err:?}");
    assert!(err.is_transient());
}
