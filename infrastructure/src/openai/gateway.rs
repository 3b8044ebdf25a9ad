//! OpenAI chat-completions gateway

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, classify_failure};
use async_trait::async_trait;
use profiler_application::{GatewayError, LlmGateway};
use profiler_domain::util::truncate_str;
use profiler_domain::{ChatTurn, Model};
use reqwest::{Client, header};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// [`LlmGateway`] over the OpenAI HTTP API
#[derive(Clone)]
pub struct OpenAiGateway {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGateway {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, model: &Model, turns: &[ChatTurn]) -> Result<String, GatewayError> {
        let start = Instant::now();
        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages: turns,
        };

        let response = self
            .http
            .post(self.endpoint())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %truncate_str(&body, 500), "OpenAI API error");
            return Err(classify_failure(status.as_u16(), &body));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        let text = body
            .into_text()
            .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".into()))?;

        debug!(
            model = %model,
            turns = turns.len(),
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );
        Ok(text)
    }
}
