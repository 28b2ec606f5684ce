//! Structured logging and credential-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a sanitizer that keeps
//! vendor credentials (API keys, signatures, auth headers) out of log sinks
//! and out of error details returned to clients.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
        }
    }
    .map_err(|e| crate::error::GatewayError::Internal(format!("Failed to init logging: {}", e)))
}

static QUERY_SECRET: OnceLock<Regex> = OnceLock::new();
static HEADER_SECRET: OnceLock<Regex> = OnceLock::new();

// Query/form parameters and JSON fields that carry credentials or signatures.
const CREDENTIAL_FIELDS: &[&str] = &[
    "key", "apikey", "api_key", "auth_key", "appid", "appkey", "app_key", "sign", "signature",
    "secret_key", "token",
];

fn query_secret() -> &'static Regex {
    QUERY_SECRET.get_or_init(|| {
        let pattern = format!(
            r#"(?i)\b({})(["']?\s*[=:]\s*["']?)[^&\s"',}}]+"#,
            CREDENTIAL_FIELDS.join("|")
        );
        Regex::new(&pattern).expect("valid credential pattern")
    })
}

// Auth schemes need whitespace before the credential, and the credential
// never spans quotes or braces, so prose such as `"Invalid token"}` is left
// intact.
fn header_secret() -> &'static Regex {
    HEADER_SECRET.get_or_init(|| {
        Regex::new(r"(?i)(\b(?:DeepL-Auth-Key|Bearer|token)\s+|TC3-HMAC-SHA256 Credential=)[A-Za-z0-9._:/+=\-]+")
            .expect("valid auth header pattern")
    })
}

/// Sanitizes credentials from strings that are about to be logged.
///
/// Covers query-string and JSON-style `key=value` pairs for the parameter
/// names used by the supported vendors, plus the auth header schemes they use.
pub fn sanitize(input: &str) -> String {
    let result = header_secret().replace_all(input, "${1}[REDACTED]");
    query_secret()
        .replace_all(&result, "$1$2[REDACTED]")
        .into_owned()
}

/// Scrubs credentials from a parsed JSON document in place.
///
/// Values of credential-named fields are replaced outright; every other
/// string goes through [`sanitize`]. Working on the parsed value keeps the
/// document well-formed whatever the vendor wrote into it.
pub fn sanitize_json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (field, entry) in map.iter_mut() {
                let is_credential = CREDENTIAL_FIELDS
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(field));
                if is_credential && (entry.is_string() || entry.is_number()) {
                    *entry = Value::String("[REDACTED]".to_string());
                } else {
                    sanitize_json(entry);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize_json),
        Value::String(text) => *text = sanitize(text),
        _ => {}
    }
}

/// Sanitizes and truncates a vendor response body for logging.
pub fn preview(body: &str, max_chars: usize) -> String {
    let sanitized = sanitize(body);
    if sanitized.chars().count() > max_chars {
        let head: String = sanitized.chars().take(max_chars).collect();
        format!("{}…", head)
    } else {
        sanitized
    }
}
