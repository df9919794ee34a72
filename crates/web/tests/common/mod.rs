#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;
use serde_json::Value;
use storage::store::MemoryLiftStore;
use tower::ServiceExt;

use web::auth::jwt::{JwtConfig, encode_token};
use web::state::AppState;

pub const OWNER_ID: i32 = 7;
pub const STRANGER_ID: i32 = 8;
pub const ADMIN_ID: i32 = 1;

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Router backed by an empty in-memory store; the store is returned so tests
/// can assert on it directly.
pub fn build_test_app() -> (Router, Arc<MemoryLiftStore>) {
    let store = Arc::new(MemoryLiftStore::new());
    let state = AppState::new(store.clone(), jwt_config());
    (web::app(state), store)
}

pub fn token_for(user_id: i32, is_superuser: bool) -> String {
    encode_token(user_id, is_superuser, &jwt_config()).unwrap()
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
