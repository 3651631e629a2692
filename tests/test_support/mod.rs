// Copyright 2025 The Curation Project Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared helpers for API integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use curation_server::CurationStores;

/// Build the full application router over fresh, empty stores with
/// persistence disabled.
pub fn app() -> Router {
    curation_server::build_router(&CurationStores::default(), None)
}

/// Send a request with a JSON body (or none) and collect status, headers
/// and the parsed response body. An empty body parses to `Value::Null`.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    request_with_content_type(app, method, uri, body, "application/json").await
}

/// Same as [`request`] but with an explicit content type, e.g.
/// `application/merge-patch+json` for PATCH.
pub async fn request_with_content_type(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    content_type: &str,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, content_type);
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("valid request"))
        .await
        .expect("router never fails");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = request(app, Method::GET, uri, None).await;
    (status, body)
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
    request(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, _, body) = request(app, Method::PUT, uri, Some(body)).await;
    (status, body)
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, _, body) = request_with_content_type(
        app,
        Method::PATCH,
        uri,
        Some(body),
        "application/merge-patch+json",
    )
    .await;
    (status, body)
}

pub async fn delete(app: &Router, uri: &str) -> StatusCode {
    let (status, _, _) = request(app, Method::DELETE, uri, None).await;
    status
}

/// Create an entity and return its assigned id.
pub async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let (status, _, created) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created["id"].as_i64().expect("assigned id")
}
