//! A single-turn Gemini session

use crate::gemini::types::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use githelper_application::ports::chat_gateway::{ChatSession, GatewayError};
use githelper_domain::Model;
use reqwest::StatusCode;
use tracing::debug;

/// One conversation context against the Generative Language API.
///
/// Created fresh per call by [`GeminiGateway`](crate::GeminiGateway);
/// holds no message history.
pub struct GeminiSession {
    client: reqwest::Client,
    model: Model,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiSession {
    pub(crate) fn new(
        client: reqwest::Client,
        model: Model,
        api_key: Option<String>,
        base_url: String,
    ) -> Self {
        Self {
            client,
            model,
            api_key,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model.as_str()
        )
    }
}

#[async_trait]
impl ChatSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        // A missing credential surfaces here, on first use, not at load time
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Auth("GEMINI_API_KEY is not set".to_string()))?;

        let url = self.endpoint();
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::user_turn(content))
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_api_error(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        parsed.text().ok_or_else(|| {
            GatewayError::MalformedResponse("response contained no reply text".to_string())
        })
    }
}

/// Map a non-success status and its body to a categorized gateway error.
///
/// Uses the service's own error message when the body parses, so the text
/// shown to the user matches what the service reported.
pub(crate) fn map_api_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| {
            format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
        _ => GatewayError::Api(message),
    }
}
