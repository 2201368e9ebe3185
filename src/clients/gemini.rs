use anyhow::Result;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Fixed sampling temperature for plan generation.
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Gemini rejected the API key: {0}")]
    Auth(String),
    #[error("Gemini rate limit or quota exceeded: {0}")]
    RateLimited(String),
    #[error("Gemini API error ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("Gemini returned no text candidates")]
    EmptyResponse,
    #[error("failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let endpoint =
            Url::parse(API_BASE_URL)?.join(&format!("models/{}:generateContent", model))?;

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            endpoint,
            api_key,
        })
    }

    /// One generateContent call, no retries. The raw candidate text comes
    /// back verbatim for the caller to parse.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };
        let json_body = serde_json::to_string(&request)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::map_api_error(status, &body));
        }

        let api_response: GenerateContentResponse = serde_json::from_str(&body)?;

        api_response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(GeminiError::EmptyResponse)
    }

    fn map_api_error(status: StatusCode, body: &str) -> GeminiError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .map_or_else(|| body.to_string(), |e| e.message);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeminiError::Auth(message),
            StatusCode::TOO_MANY_REQUESTS => GeminiError::RateLimited(message),
            _ => GeminiError::Service {
                status: status.as_u16(),
                message,
            },
        }
    }
}
