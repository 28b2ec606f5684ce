// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use transgate::error::{ErrorKind, GatewayError, UpstreamCause};
use transgate::models::Provider;

async fn body_json(error: GatewayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        GatewayError::invalid_input("Text is required"),
        GatewayError::UnsupportedLanguage {
            provider: Provider::Deepl,
            language: "xx".to_string(),
            supported: vec!["DE"],
        },
        GatewayError::UnknownProvider("papago".to_string()),
        GatewayError::auth(Provider::Bing, "credentials rejected"),
        GatewayError::upstream(Provider::Baidu, UpstreamCause::Network, "connection refused"),
        GatewayError::Config("bad port".to_string()),
        GatewayError::Internal("boom".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_status_codes() {
    assert_eq!(
        GatewayError::invalid_input("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        GatewayError::UnknownProvider("x".into()).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        GatewayError::auth(Provider::Deepl, "x").status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        GatewayError::upstream(Provider::Deepl, UpstreamCause::Timeout, "x").status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        GatewayError::Config("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_transient_causes() {
    let transient = [
        UpstreamCause::Timeout,
        UpstreamCause::Network,
        UpstreamCause::RateLimited,
        UpstreamCause::HttpStatus(503),
    ];
    for cause in transient {
        assert!(GatewayError::upstream(Provider::Google, cause, "x").is_transient());
    }

    let permanent = [
        UpstreamCause::HttpStatus(404),
        UpstreamCause::VendorError("54003".into()),
        UpstreamCause::MalformedResponse,
    ];
    for cause in permanent {
        assert!(!GatewayError::upstream(Provider::Google, cause, "x").is_transient());
    }

    assert!(!GatewayError::auth(Provider::Google, "x").is_transient());
    assert!(!GatewayError::invalid_input("x").is_transient());
}

#[test]
fn test_kind_and_provider() {
    let error = GatewayError::upstream(Provider::Youdao, UpstreamCause::MalformedResponse, "x");
    assert_eq!(error.kind(), ErrorKind::UpstreamFailure);
    assert_eq!(error.provider(), Some(Provider::Youdao));
    assert_eq!(error.upstream_cause(), Some(&UpstreamCause::MalformedResponse));

    let error = GatewayError::UnknownProvider("x".into());
    assert_eq!(error.provider(), None);
}

#[tokio::test]
async fn test_unsupported_language_body_lists_codes() {
    let (status, body) = body_json(GatewayError::UnsupportedLanguage {
        provider: Provider::Caiyun,
        language: "de".to_string(),
        supported: vec!["zh", "en", "ja"],
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "UnsupportedLanguage");
    assert_eq!(body["provider"], "caiyun");
    assert_eq!(body["supported"], json!(["zh", "en", "ja"]));
}

#[tokio::test]
async fn test_upstream_body_carries_cause_and_detail() {
    let error = GatewayError::upstream(
        Provider::Baidu,
        UpstreamCause::VendorError("54003".into()),
        "Invalid Access Limit",
    )
    .with_detail(json!({"code": "54003"}));

    let (status, body) = body_json(error).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "UpstreamFailure");
    assert_eq!(body["cause"], "vendor_error");
    assert_eq!(body["detail"]["code"], "54003");
}

#[tokio::test]
async fn test_invalid_input_body_has_no_provider() {
    let (status, body) = body_json(GatewayError::invalid_input("Text is required")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text is required");
    assert!(body.get("provider").is_none());
    assert!(body.get("supported").is_none());
}

#[test]
fn test_with_detail_ignores_other_kinds() {
    let error = GatewayError::invalid_input("x").with_detail(json!({"a": 1}));
    assert!(error.detail().is_none());
}

#[tokio::test]
async fn test_payload_too_large_body() {
    let error = GatewayError::PayloadTooLarge { limit: 64 };
    assert_eq!(error.kind(), ErrorKind::InvalidInput);
    assert!(!error.is_transient());

    let (status, body) = body_json(error).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["kind"], "InvalidInput");
    assert_eq!(body["error"], "Request body exceeds the 64 byte limit");
}
