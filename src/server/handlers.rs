// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{GatewayError, Result};
use crate::languages::{self, Language};
use crate::models::{Provider, TranslationRequest, TranslationResult};
use crate::utils::logging::preview;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: BTreeMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub available: Vec<Provider>,
    pub unavailable: BTreeMap<Provider, String>,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub provider: Provider,
    pub detection: bool,
    pub languages: Vec<Language>,
}

/// Handler for `POST /translate/{provider}`
pub async fn translate_handler(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<TranslationResult>> {
    // Raw bytes so body errors of any sort map onto the JSON error shape.
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GatewayError::PayloadTooLarge {
                limit: state.config.performance.max_body_bytes,
            }
        } else {
            GatewayError::invalid_input(format!("Unreadable request body: {}", rejection.body_text()))
        }
    })?;
    debug!("Translate request for {} ({} bytes)", provider, body.len());

    let request: TranslationRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(
            "Rejecting malformed body ({}): {}",
            e,
            preview(&String::from_utf8_lossy(&body), 200)
        );
        GatewayError::invalid_input(format!("Invalid JSON body: {}", e))
    })?;

    let result = state.gateway.handle(request.with_provider(provider)).await?;
    Ok(Json(result))
}

/// Handler for `GET /providers`
pub async fn providers_handler(State(state): State<AppState>) -> Json<ProvidersResponse> {
    let registry = state.gateway.registry();
    Json(ProvidersResponse {
        available: registry.available(),
        unavailable: registry.unavailable().clone(),
    })
}

/// Handler for `GET /providers/{provider}/languages`
pub async fn languages_handler(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<Json<LanguagesResponse>> {
    let provider: Provider = provider.parse()?;
    let set = languages::for_provider(provider);

    // Unconfigured providers still report the compiled-in set.
    let detection = state
        .gateway
        .registry()
        .resolve(provider.as_str())
        .map(|adapter| adapter.supports_detection())
        .unwrap_or(true);

    Ok(Json(LanguagesResponse {
        provider,
        detection,
        languages: set.languages(),
    }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.gateway.registry();
    let mut checks = BTreeMap::new();

    for provider in Provider::ALL {
        let check = match registry.unavailable().get(&provider) {
            Some(reason) => HealthCheck {
                status: "error".to_string(),
                message: reason.clone(),
            },
            None if registry.is_available(provider) => HealthCheck {
                status: "ok".to_string(),
                message: "Configured".to_string(),
            },
            None => continue,
        };
        checks.insert(format!("provider_{}", provider), check);
    }

    checks.insert(
        "configuration".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!(
                "Upstream timeout {}s, max retries {}",
                state.config.gateway.timeout_seconds, state.config.gateway.max_retries
            ),
        },
    );

    let available = registry.available().len();
    let status = if available == 0 {
        HealthStatus::Unhealthy
    } else if available < Provider::ALL.len() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    Json(HealthResponse {
        status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Prometheus text exposition
pub async fn metrics_handler() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
        .into_response()
}
