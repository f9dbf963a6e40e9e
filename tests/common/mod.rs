//! Fake rockets API served in-process for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use rocket_catalog::{ApiClient, CatalogConfig, MemoryStorage, RocketCatalog};

pub struct FakeApi {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FakeApi {
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API");
        let addr = listener.local_addr().expect("Failed to read fake API address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Fake API crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.base_url)
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a port");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);
    format!("http://{}", addr)
}

/// Raw API record as `/v4/rockets` returns it.
pub fn remote_rocket(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "flickr_images": [format!("https://imgur.com/{}.jpg", id)],
        "cost_per_launch": 50000000,
        "country": "United States",
        "first_flight": "2010-06-04",
        "active": true
    })
}

/// Serves `/v4/rockets` and `/v4/rockets/{id}` from a fixed list.
pub fn rockets_router(rockets: Vec<Value>) -> Router {
    let rockets = Arc::new(rockets);
    let list = rockets.clone();

    Router::new()
        .route(
            "/v4/rockets",
            get(move || async move { Json(Value::Array((*list).clone())) }),
        )
        .route(
            "/v4/rockets/{id}",
            get(move |Path(id): Path<String>| async move {
                match rockets.iter().find(|r| r["id"] == id.as_str()) {
                    Some(rocket) => Json(rocket.clone()).into_response(),
                    None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
                }
            }),
        )
}

/// Answers every request with `status` and a plain-text `body`.
pub fn failing_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Echoes request headers and JSON bodies back as JSON.
pub fn echo_router() -> Router {
    Router::new()
        .route(
            "/echo/headers",
            get(|headers: HeaderMap| async move {
                let value = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                Json(json!({
                    "content_type": value(header::CONTENT_TYPE),
                    "authorization": value(header::AUTHORIZATION),
                }))
            }),
        )
        .route(
            "/echo/body",
            post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
        )
        .route("/not-json", get(|| async { "plain text" }))
}

pub fn catalog_for(base_url: &str, storage: Arc<MemoryStorage>) -> RocketCatalog {
    let client = ApiClient::new(&CatalogConfig::new(base_url)).expect("Failed to build client");
    RocketCatalog::new(client, storage)
}
