//! Configuration data structures for the transgate gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, gateway timeouts and retry policy, per-provider credentials and
//! endpoints, logging, and performance tuning.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Request handling policy shared by every provider.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Credentials and endpoints for each translation vendor.
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Performance and resource management settings.
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of tokio worker threads.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Timeout and retry policy applied around every adapter call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Upper bound for a single outbound translation call, in seconds.
    /// Default: `15`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retries for transient upstream failures. `0` disables retrying.
    /// Default: `0`
    #[serde(default)]
    pub max_retries: u32,
}

/// A credential value. Never printed, wiped from memory on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Secret)
    }
}

/// Returns the secret if it is present and non-blank.
pub fn present(secret: &Option<Secret>) -> Option<&Secret> {
    secret.as_ref().filter(|s| !s.is_blank())
}

/// Per-vendor settings. A vendor whose required credentials are absent is
/// registered as unavailable at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub baidu: BaiduConfig,
    #[serde(default)]
    pub bing: BingConfig,
    #[serde(default)]
    pub caiyun: CaiyunConfig,
    #[serde(default)]
    pub deepl: DeepLConfig,
    #[serde(default)]
    pub tencent: TencentConfig,
    #[serde(default)]
    pub niutrans: NiuTransConfig,
    #[serde(default)]
    pub youdao: YoudaoConfig,
}

/// Google Generative AI (Gemini) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Secret>,

    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_google_endpoint")]
    pub endpoint: String,

    /// Default: `gemini-2.5-pro`
    #[serde(default = "default_google_model")]
    pub model: String,
}

/// Baidu Fanyi settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaiduConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<Secret>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<Secret>,

    #[serde(default = "default_baidu_endpoint")]
    pub endpoint: String,
}

/// Microsoft Translator (Bing) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Secret>,

    /// Azure resource region; only needed for regional resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default = "default_bing_endpoint")]
    pub endpoint: String,
}

/// Caiyun (LingoCloud) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaiyunConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Secret>,

    #[serde(default = "default_caiyun_endpoint")]
    pub endpoint: String,
}

/// DeepL settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Secret>,

    /// Default: the free-tier endpoint.
    #[serde(default = "default_deepl_endpoint")]
    pub endpoint: String,
}

/// Tencent Cloud Machine Translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TencentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<Secret>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<Secret>,

    /// Default: `ap-guangzhou`
    #[serde(default = "default_tencent_region")]
    pub region: String,

    #[serde(default = "default_tencent_endpoint")]
    pub endpoint: String,
}

/// NiuTrans (Xiaoniu) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NiuTransConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Secret>,

    #[serde(default = "default_niutrans_endpoint")]
    pub endpoint: String,
}

/// Youdao AI Cloud settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoudaoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_key: Option<Secret>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_secret: Option<Secret>,

    #[serde(default = "default_youdao_endpoint")]
    pub endpoint: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Settings for tuning application performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Maximum number of idle connections kept per upstream host.
    /// Default: `32`
    #[serde(default = "default_pool_size")]
    pub connection_pool_size: usize,

    /// Whether to gzip HTTP responses.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub enable_compression: bool,

    /// Largest accepted request body, in bytes.
    /// Default: `1048576` (1 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: 0,
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_google_endpoint(),
            model: default_google_model(),
        }
    }
}

impl Default for BaiduConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            secret_key: None,
            endpoint: default_baidu_endpoint(),
        }
    }
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            key: None,
            region: None,
            endpoint: default_bing_endpoint(),
        }
    }
}

impl Default for CaiyunConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: default_caiyun_endpoint(),
        }
    }
}

impl Default for DeepLConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_deepl_endpoint(),
        }
    }
}

impl Default for TencentConfig {
    fn default() -> Self {
        Self {
            secret_id: None,
            secret_key: None,
            region: default_tencent_region(),
            endpoint: default_tencent_endpoint(),
        }
    }
}

impl Default for NiuTransConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_niutrans_endpoint(),
        }
    }
}

impl Default for YoudaoConfig {
    fn default() -> Self {
        Self {
            app_key: None,
            app_secret: None,
            endpoint: default_youdao_endpoint(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            connection_pool_size: default_pool_size(),
            enable_compression: true,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// Helper functions for serde defaults and shared constants
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_timeout() -> u64 {
    15
}

fn default_google_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_google_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_baidu_endpoint() -> String {
    "https://fanyi-api.baidu.com/api/trans/vip/translate".to_string()
}

fn default_bing_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com".to_string()
}

fn default_caiyun_endpoint() -> String {
    "https://api.interpreter.caiyunai.com/v1/translator".to_string()
}

fn default_deepl_endpoint() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_tencent_region() -> String {
    "ap-guangzhou".to_string()
}

fn default_tencent_endpoint() -> String {
    "https://tmt.tencentcloudapi.com".to_string()
}

fn default_niutrans_endpoint() -> String {
    "https://api.niutrans.com/NiuTransServer/translation".to_string()
}

fn default_youdao_endpoint() -> String {
    "https://openapi.youdao.com/api".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_pool_size() -> usize {
    32
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}
