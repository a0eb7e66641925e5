//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use operadora_routes::config::AppConfig;
use operadora_routes::http::HttpServer;
use tower::ServiceExt;

/// Build the application router for `config`.
pub fn app(config: AppConfig) -> Router {
    HttpServer::new(config).unwrap().app()
}

/// Send a GET through the router and decode the JSON body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, serde_json::Value) {
    get_with_headers(app, uri, &[]).await
}

pub async fn get_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, headers, json)
}

/// Write `content` to a uniquely named file in the temp directory.
pub fn write_temp_config(content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("operadora-routes-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}
