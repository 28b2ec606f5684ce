// HTTP surface tests
// Author: kelexine (https://github.com/kelexine)

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use transgate::config::{AppConfig, Secret};
use transgate::gateway::Gateway;
use transgate::providers::{http, ProviderRegistry};
use transgate::server::create_router;

/// Router with DeepL and Bing configured against `upstream`; every other
/// provider is left without credentials.
fn app(upstream: &Server) -> Router {
    app_with(upstream, AppConfig::default())
}

fn app_with(upstream: &Server, mut config: AppConfig) -> Router {
    config.providers.deepl.api_key = Some(Secret::new("deepl-key"));
    config.providers.deepl.endpoint = format!("{}/v2/translate", upstream.url());
    config.providers.bing.key = Some(Secret::new("bing-key"));
    config.providers.bing.endpoint = upstream.url();

    let client = http::build_client(&config.gateway, &config.performance).unwrap();
    let registry = ProviderRegistry::from_config(&config.providers, client);
    let gateway = Gateway::from_config(Arc::new(registry), &config.gateway);
    create_router(config, gateway)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_translate_deepl() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("POST", "/v2/translate")
        .match_body(Matcher::UrlEncoded("target_lang".into(), "DE".into()))
        .with_status(200)
        .with_body(r#"{"translations":[{"detected_source_language":"EN","text":"Hallo"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let (status, body) = send(
        app(&upstream),
        post_json("/translate/deepl", r#"{"text":"Hello","target_lang":"DE"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"translated": "Hallo", "from": "EN", "to": "DE", "provider": "deepl"})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_translate_without_target_is_bad_request() {
    let upstream = Server::new_async().await;
    let (status, body) = send(app(&upstream), post_json("/translate/bing", r#"{"text":"Hi"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid target language");
    assert_eq!(body["kind"], "InvalidInput");
    assert!(body["supported"].as_array().unwrap().contains(&json!("de")));
}

#[tokio::test]
async fn test_translate_unknown_provider_is_not_found() {
    let upstream = Server::new_async().await;
    let (status, body) = send(
        app(&upstream),
        post_json("/translate/papago", r#"{"text":"Hi","to":"ko"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "UnknownProvider");
}

#[tokio::test]
async fn test_translate_unconfigured_provider_is_auth_failure() {
    let upstream = Server::new_async().await;
    let (status, body) = send(
        app(&upstream),
        post_json("/translate/youdao", r#"{"text":"Hi","to":"en"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "AuthFailure");
    assert_eq!(body["provider"], "youdao");
}

#[tokio::test]
async fn test_translate_malformed_json_is_bad_request() {
    let upstream = Server::new_async().await;
    let (status, body) = send(app(&upstream), post_json("/translate/deepl", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
}

#[tokio::test]
async fn test_translate_non_utf8_body_is_json_error() {
    let upstream = Server::new_async().await;
    let request = Request::builder()
        .method("POST")
        .uri("/translate/deepl")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(vec![b'{', 0xFF, 0xFE, b'}']))
        .unwrap();

    let (status, body) = send(app(&upstream), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidInput");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_translate_oversized_body_is_json_error() {
    let mut upstream = Server::new_async().await;
    let mock = upstream
        .mock("POST", "/v2/translate")
        .expect(0)
        .create_async()
        .await;

    let mut config = AppConfig::default();
    config.performance.max_body_bytes = 64;
    let text = "a".repeat(256);
    let (status, body) = send(
        app_with(&upstream, config),
        post_json("/translate/deepl", &json!({"text": text, "to": "DE"}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["kind"], "InvalidInput");
    assert_eq!(body["error"], "Request body exceeds the 64 byte limit");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_detail_survives_credential_words() {
    let mut upstream = Server::new_async().await;
    upstream
        .mock("POST", "/v2/translate")
        .with_status(503)
        .with_body(r#"{"message":"Invalid token"}"#)
        .create_async()
        .await;

    let (status, body) = send(
        app(&upstream),
        post_json("/translate/deepl", r#"{"text":"Hi","to":"DE"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], json!({"message": "Invalid token"}));
    assert_eq!(
        body["error"],
        "deepl upstream failure (HTTP 503): Invalid token"
    );
}

#[tokio::test]
async fn test_translate_empty_text() {
    let upstream = Server::new_async().await;
    let (status, body) = send(
        app(&upstream),
        post_json("/translate/deepl", r#"{"text":"   ","to":"DE"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_translate_unsupported_language_lists_codes() {
    let upstream = Server::new_async().await;
    let (status, body) = send(
        app(&upstream),
        post_json("/translate/deepl", r#"{"text":"Hi","to":"tlh"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "UnsupportedLanguage");
    assert!(body["supported"].as_array().unwrap().contains(&json!("DE")));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let mut upstream = Server::new_async().await;
    upstream
        .mock("POST", "/v2/translate")
        .with_status(500)
        .with_body(r#"{"message":"Internal error"}"#)
        .create_async()
        .await;

    let (status, body) = send(
        app(&upstream),
        post_json("/translate/deepl", r#"{"text":"Hi","to":"DE"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "UpstreamFailure");
    assert_eq!(body["cause"], "http_status");
    assert_eq!(body["provider"], "deepl");
}

#[tokio::test]
async fn test_providers_listing() {
    let upstream = Server::new_async().await;
    let (status, body) = send(app(&upstream), get("/providers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], json!(["bing", "deepl"]));
    assert!(body["unavailable"]["google"]
        .as_str()
        .unwrap()
        .contains("providers.google.api_key"));
}

#[tokio::test]
async fn test_languages_listing() {
    let upstream = Server::new_async().await;
    let (status, body) = send(app(&upstream), get("/providers/caiyun/languages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "caiyun");
    assert_eq!(
        body["languages"],
        json!([
            {"code": "zh", "name": "Chinese"},
            {"code": "en", "name": "English"},
            {"code": "ja", "name": "Japanese"}
        ])
    );

    let (status, _) = send(app(&upstream), get("/providers/papago/languages")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_degraded_with_partial_configuration() {
    let upstream = Server::new_async().await;
    let (status, body) = send(app(&upstream), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["provider_deepl"]["status"], "ok");
    assert_eq!(body["checks"]["provider_youdao"]["status"], "error");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let upstream = Server::new_async().await;
    let response = app(&upstream).oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let upstream = Server::new_async().await;
    let response = app(&upstream).oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
