use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use bytes::Bytes;
use rstest::*;
use tidings_net::{HttpClient, HttpError, ReqwestClient};
use tidings_test_utils::TestHttpServer;
use tokio::net::TcpListener;
use url::Url;

// Test endpoints

async fn plain_endpoint() -> &'static str {
    "Hello, World!"
}

async fn not_found_endpoint() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "no such feed")
}

async fn server_error_endpoint() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn created_endpoint() -> impl IntoResponse {
    (StatusCode::CREATED, "created")
}

async fn empty_endpoint() -> impl IntoResponse {
    StatusCode::OK
}

// Fixtures

#[fixture]
fn test_router() -> Router {
    Router::new()
        .route("/plain", get(plain_endpoint))
        .route("/not-found", get(not_found_endpoint))
        .route("/server-error", get(server_error_endpoint))
        .route("/created", get(created_endpoint))
        .route("/empty", get(empty_endpoint))
}

#[fixture]
async fn test_server(test_router: Router) -> TestHttpServer {
    TestHttpServer::serve(test_router).await
}

#[fixture]
fn client() -> ReqwestClient {
    ReqwestClient::new().expect("build reqwest client")
}

// Tests

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn get_returns_status_and_body_on_success(
    #[future] test_server: TestHttpServer,
    client: ReqwestClient,
) {
    let test_server = test_server.await;

    let response = client.get(test_server.url("/plain")).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, Bytes::from_static(b"Hello, World!"));
}

// Non-success statuses are transport successes at this layer; the status and
// body must come through untouched.
#[rstest]
#[case("/not-found", 404, &b"no such feed"[..])]
#[case("/server-error", 500, &b"boom"[..])]
#[case("/created", 201, &b"created"[..])]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn get_surfaces_non_success_statuses_as_responses(
    #[future] test_server: TestHttpServer,
    client: ReqwestClient,
    #[case] path: &str,
    #[case] expected_status: u16,
    #[case] expected_body: &'static [u8],
) {
    let test_server = test_server.await;

    let response = client.get(test_server.url(path)).await.unwrap();

    assert_eq!(response.status, expected_status);
    assert_eq!(response.body, Bytes::from_static(expected_body));
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn get_returns_empty_body_when_server_sends_none(
    #[future] test_server: TestHttpServer,
    client: ReqwestClient,
) {
    let test_server = test_server.await;

    let response = client.get(test_server.url("/empty")).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.is_empty());
}

#[rstest]
#[timeout(Duration::from_secs(5))]
#[tokio::test]
async fn get_reports_transport_error_when_connection_is_refused(client: ReqwestClient) {
    // Bind and immediately drop a listener to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/feed")).unwrap();
    let error = client.get(url).await.unwrap_err();

    assert!(
        matches!(error, HttpError::Transport(_)),
        "expected transport error, got {error:?}"
    );
}
