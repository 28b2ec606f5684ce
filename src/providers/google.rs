// Google Generative AI (Gemini) adapter
// Author: kelexine (https://github.com/kelexine)

use super::{http, join_url, require_secret, TranslationProvider};
use crate::config::{GoogleConfig, Secret};
use crate::error::{GatewayError, Result, UpstreamCause};
use crate::languages::{self, LanguageSet};
use crate::models::{Provider, ProviderRequest, TranslationResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PROVIDER: Provider = Provider::Google;

pub struct GoogleProvider {
    client: Client,
    api_key: Secret,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Translation prompt for `text` into `target_name`, optionally naming the
/// source language.
pub fn build_prompt(text: &str, source_name: Option<&str>, target_name: &str) -> String {
    let direction = match source_name {
        Some(source) => format!("from {} to {}", source, target_name),
        None => format!("to {}", target_name),
    };
    format!(
        "Translate the following text {}:\n\"\"\"\n{}\n\"\"\"\n\n\
         Output only the raw translation, with no explanations, quotes or \
         extra punctuation.",
        direction, text
    )
}

impl GoogleProvider {
    pub fn new(config: &GoogleConfig, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            api_key: require_secret(PROVIDER, &config.api_key, "api_key")?,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    fn provider(&self) -> Provider {
        PROVIDER
    }

    fn languages(&self) -> &'static LanguageSet {
        &languages::GOOGLE
    }

    async fn translate(&self, request: &ProviderRequest) -> Result<TranslationResult> {
        let languages = self.languages();
        let target_name = languages.display_name(&request.target).unwrap_or(request.target.as_str());
        let source_name = if request.is_auto_source() {
            None
        } else {
            languages.display_name(&request.source)
        };

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Some(build_prompt(&request.text, source_name, target_name)),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        let url = join_url(
            &self.endpoint,
            &format!("models/{}:generateContent", self.model),
        );
        debug!("Calling generateContent for model: {}", self.model);

        let outbound = self
            .client
            .post(url)
            .query(&[("key", self.api_key.expose())])
            .json(&body);

        let response = http::send(PROVIDER, outbound).await?;
        http::ensure_success(PROVIDER, &response)?;

        let parsed: GenerateContentResponse = http::parse_json(PROVIDER, &response.body)?;

        if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(http::vendor_error(
                PROVIDER,
                &reason,
                format!("prompt blocked: {}", reason),
            ));
        }

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            http::vendor_error(PROVIDER, "NO_CANDIDATES", "model returned no candidates")
        })?;

        let translated = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                GatewayError::upstream(
                    PROVIDER,
                    UpstreamCause::MalformedResponse,
                    "candidate contained no text",
                )
            })?;

        Ok(TranslationResult {
            translated,
            from: request.source.clone(),
            to: request.target.clone(),
            provider: PROVIDER,
        })
    }
}
