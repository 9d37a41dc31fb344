use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Sends `prompt` and returns the raw reply text.
    async fn generate_content(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or why there is none.
    fn into_text(self) -> AppResult<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AppError::ModelRejected(format!(
                "prompt was blocked ({})",
                reason
            )));
        }

        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            AppError::ModelRejected("response contained no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(AppError::ModelRejected(format!(
                "response contained no text (finish reason: {})",
                reason
            )));
        }

        Ok(text)
    }
}

/// Maps a failed HTTP exchange to an error, preferring the API's own message.
fn status_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        AppError::ModelUnavailable(message)
    } else {
        AppError::ModelRejected(message)
    }
}

fn parse_reply(status: StatusCode, body: &str) -> AppResult<String> {
    let parsed: Result<GenerateContentResponse, _> = serde_json::from_str(body);

    match parsed {
        Ok(GenerateContentResponse {
            error: Some(error), ..
        }) => Err(status_error(status, error.message)),
        Ok(_) if !status.is_success() => Err(status_error(status, format!("HTTP {}", status))),
        Ok(response) => response.into_text(),
        Err(_) if !status.is_success() => Err(status_error(
            status,
            format!("HTTP {}: {}", status, body.trim()),
        )),
        Err(e) => Err(AppError::ModelRejected(format!(
            "could not decode model response: {}",
            e
        ))),
    }
}

/// Calls Gemini's `generateContent` endpoint.
pub struct GeminiModelService {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

impl GeminiModelService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("study-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.gemini_api_base.trim_end_matches('/'),
                config.gemini_model
            ),
            api_key: config.gemini_api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModelService for GeminiModelService {
    async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        log::debug!("Sending {} byte prompt to {}", prompt.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        parse_reply(status, &body)
    }
}
