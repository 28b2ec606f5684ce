// Error types for the transgate gateway
// Author: kelexine (https://github.com/kelexine)

use crate::models::Provider;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Why an upstream call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamCause {
    Timeout,
    Network,
    RateLimited,
    HttpStatus(u16),
    VendorError(String),
    MalformedResponse,
}

impl UpstreamCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamCause::Timeout => "timeout",
            UpstreamCause::Network => "network",
            UpstreamCause::RateLimited => "rate_limited",
            UpstreamCause::HttpStatus(_) => "http_status",
            UpstreamCause::VendorError(_) => "vendor_error",
            UpstreamCause::MalformedResponse => "malformed_response",
        }
    }

    /// Failures a caller-level retry policy may try again.
    pub fn is_transient(&self) -> bool {
        match self {
            UpstreamCause::Timeout | UpstreamCause::Network | UpstreamCause::RateLimited => true,
            UpstreamCause::HttpStatus(status) => *status >= 500,
            UpstreamCause::VendorError(_) | UpstreamCause::MalformedResponse => false,
        }
    }
}

impl fmt::Display for UpstreamCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamCause::HttpStatus(status) => write!(f, "HTTP {}", status),
            UpstreamCause::VendorError(code) => write!(f, "vendor error {}", code),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Error kinds reported to clients in the `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedLanguage,
    UnknownProvider,
    AuthFailure,
    UpstreamFailure,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::UnsupportedLanguage => "UnsupportedLanguage",
            ErrorKind::UnknownProvider => "UnknownProvider",
            ErrorKind::AuthFailure => "AuthFailure",
            ErrorKind::UpstreamFailure => "UpstreamFailure",
            ErrorKind::Internal => "Internal",
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{message}")]
    InvalidInput {
        message: String,
        /// Codes the selected provider accepts, when the provider is known.
        supported: Option<Vec<&'static str>>,
    },

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Unsupported language '{language}' for {provider}")]
    UnsupportedLanguage {
        provider: Provider,
        language: String,
        supported: Vec<&'static str>,
    },

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("{provider} authentication failed: {message}")]
    AuthFailure { provider: Provider, message: String },

    #[error("{provider} upstream failure ({cause}): {message}")]
    UpstreamFailure {
        provider: Provider,
        cause: UpstreamCause,
        message: String,
        detail: Option<Value>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GatewayError::InvalidInput {
            message: message.into(),
            supported: None,
        }
    }

    pub fn upstream(provider: Provider, cause: UpstreamCause, message: impl Into<String>) -> Self {
        GatewayError::UpstreamFailure {
            provider,
            cause,
            message: message.into(),
            detail: None,
        }
    }

    pub fn auth(provider: Provider, message: impl Into<String>) -> Self {
        GatewayError::AuthFailure {
            provider,
            message: message.into(),
        }
    }

    /// Attach an opaque vendor payload to an upstream failure.
    pub fn with_detail(self, value: Value) -> Self {
        match self {
            GatewayError::UpstreamFailure {
                provider,
                cause,
                message,
                ..
            } => GatewayError::UpstreamFailure {
                provider,
                cause,
                message,
                detail: Some(value),
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::InvalidInput { .. } | GatewayError::PayloadTooLarge { .. } => {
                ErrorKind::InvalidInput
            }
            GatewayError::UnsupportedLanguage { .. } => ErrorKind::UnsupportedLanguage,
            GatewayError::UnknownProvider(_) => ErrorKind::UnknownProvider,
            GatewayError::AuthFailure { .. } => ErrorKind::AuthFailure,
            GatewayError::UpstreamFailure { .. } => ErrorKind::UpstreamFailure,
            _ => ErrorKind::Internal,
        }
    }

    pub fn provider(&self) -> Option<Provider> {
        match self {
            GatewayError::UnsupportedLanguage { provider, .. }
            | GatewayError::AuthFailure { provider, .. }
            | GatewayError::UpstreamFailure { provider, .. } => Some(*provider),
            _ => None,
        }
    }

    pub fn upstream_cause(&self) -> Option<&UpstreamCause> {
        match self {
            GatewayError::UpstreamFailure { cause, .. } => Some(cause),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&Value> {
        match self {
            GatewayError::UpstreamFailure { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }

    /// Whether an explicit retry policy may attempt the call again.
    /// Auth and input errors never qualify.
    pub fn is_transient(&self) -> bool {
        self.upstream_cause().map(UpstreamCause::is_transient).unwrap_or(false)
    }

    pub fn status_code(&self) -> StatusCode {
        if let GatewayError::PayloadTooLarge { .. } = self {
            return StatusCode::PAYLOAD_TOO_LARGE;
        }
        match self.kind() {
            ErrorKind::InvalidInput | ErrorKind::UnsupportedLanguage => StatusCode::BAD_REQUEST,
            ErrorKind::UnknownProvider => StatusCode::NOT_FOUND,
            ErrorKind::AuthFailure | ErrorKind::UpstreamFailure => StatusCode::BAD_GATEWAY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert GatewayError to HTTP responses for Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind().as_str(),
        });

        if let Some(provider) = self.provider() {
            body["provider"] = json!(provider);
        }

        match &self {
            GatewayError::InvalidInput {
                supported: Some(supported),
                ..
            }
            | GatewayError::UnsupportedLanguage { supported, .. } => {
                body["supported"] = json!(supported);
            }
            GatewayError::UpstreamFailure { cause, detail, .. } => {
                body["cause"] = json!(cause.as_str());
                if let Some(detail) = detail {
                    body["detail"] = detail.clone();
                }
            }
            _ => {}
        }

        crate::metrics::record_gateway_error(
            self.provider().map(|p| p.as_str()).unwrap_or("none"),
            self.kind().as_str(),
        );

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
