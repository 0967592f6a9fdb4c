use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::completion::{ChatMessage, CompletionClient, CompletionError};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

// Structures matching the OpenAI-style /v1/chat/completions endpoint
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct CompletionResponse {
    choices: Vec<Choice>,
    // usage, id, created etc. are ignored
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`CompletionClient`] for OpenAI and any server speaking the same chat
/// completions protocol (LM Studio, Ollama's OpenAI shim, vLLM, ...).
///
/// No timeout or retry is configured: a failed call fails that one exchange.
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    url: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: Option<String>, model: impl Into<String>) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            model: model.into(),
            url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let payload = CompletionRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens,
        };

        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CompletionError::Request(format!("{} ({})", e, self.url)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            debug!(%status, %error_body, "Completion API returned an error status");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let completion = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?
            .message
            .content
            .unwrap_or_default();

        debug!(response = ?text, "Received completion");
        Ok(text)
    }
}
