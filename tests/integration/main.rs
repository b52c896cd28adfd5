//! End-to-end tests for both servers over real TCP sockets.
//!
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use demo_servers::config::Config;
use demo_servers::utils::bind;
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

/// Serve `router` on `listener` in the background and return its address.
async fn spawn_server(listener: TcpListener, router: axum::Router) -> SocketAddr {
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_page_server() -> SocketAddr {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let router = demo_servers::page::create_router(demo_servers::page::PageState::new());
    spawn_server(listener, router).await
}

async fn spawn_api_server() -> SocketAddr {
    let listener = bind("127.0.0.1:0").await.unwrap();
    spawn_server(listener, demo_servers::api::create_router()).await
}

#[tokio::test]
async fn page_server_serves_html_home() {
    let addr = spawn_page_server().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("Hello, World!"));
    assert!(body.contains(demo_servers::page::template::PAGE_MESSAGE));
}

#[tokio::test]
async fn page_server_health_is_healthy() {
    let addr = spawn_page_server().await;

    let json: serde_json::Value = reqwest::get(format!("http://{addr}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["status"], "healthy");
    let stamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
}

#[tokio::test]
async fn api_server_health_and_info() {
    let addr = spawn_api_server().await;

    let health: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "go-app");
    assert_eq!(health["version"], "1.0.0");

    let info: serde_json::Value = reqwest::get(format!("http://{addr}/api/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        info["features"],
        serde_json::json!([
            "RESTful API",
            "Health checks",
            "CORS support",
            "Prometheus metrics",
            "Docker ready",
        ])
    );
}

#[tokio::test]
async fn api_server_metrics_and_cors() {
    let addr = spawn_api_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{addr}/metrics"))
        .header("Origin", "http://dashboard.local")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    let body = response.text().await.unwrap();
    assert!(body.lines().any(|line| line == "go_app_up 1"));

    let missing = client
        .get(format!("http://{addr}/does-not-exist"))
        .header("Origin", "http://dashboard.local")
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(missing.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn api_server_listens_on_configured_port() {
    let config = Config::from_vars(vec![("PORT".to_string(), "9090".to_string())]).unwrap();
    let listener = bind(&config.listen_addr()).await.unwrap();
    assert_eq!(listener.local_addr().unwrap().port(), 9090);

    spawn_server(listener, demo_servers::api::create_router()).await;

    let response = reqwest::get("http://127.0.0.1:9090/health").await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn api_server_rejects_unparseable_port() {
    let config = Config::from_vars(vec![("PORT".to_string(), "eighty".to_string())]).unwrap();

    let result = bind(&config.listen_addr()).await;

    assert!(matches!(
        result,
        Err(demo_servers::ServerError::Bind { .. })
    ));
}
