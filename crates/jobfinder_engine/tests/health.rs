use jobfinder_engine::{FetchSettings, JobFetcher, ReqwestJobFetcher};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(base_url: String) -> ReqwestJobFetcher {
    ReqwestJobFetcher::new(FetchSettings {
        base_url,
        ..FetchSettings::default()
    })
    .expect("client")
}

async fn server_replying(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn healthy_status_is_true() {
    let server =
        server_replying(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"}))).await;
    assert!(fetcher(server.uri()).check_health().await);
}

#[tokio::test]
async fn other_status_value_is_false() {
    let server =
        server_replying(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"}))).await;
    assert!(!fetcher(server.uri()).check_health().await);
}

#[tokio::test]
async fn error_status_is_false() {
    let server = server_replying(ResponseTemplate::new(500)).await;
    assert!(!fetcher(server.uri()).check_health().await);
}

#[tokio::test]
async fn malformed_body_is_false() {
    let server = server_replying(ResponseTemplate::new(200).set_body_string("ok")).await;
    assert!(!fetcher(server.uri()).check_health().await);
}

#[tokio::test]
async fn unreachable_is_false() {
    assert!(!fetcher("http://127.0.0.1:9".to_string()).check_health().await);
}
