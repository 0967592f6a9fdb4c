// Capability seam between the bot and whatever backend produces completions.
// The HTTP implementation lives in openai.rs; tests plug in fakes.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Role tag attached to every message sent to the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Any failure of a completion call. Callers treat every variant the same way;
/// the variants only exist so the log line names the cause.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion endpoint failed: {0}")]
    Request(String),

    #[error("completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not parse completion response: {0}")]
    InvalidResponse(String),

    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Sampling parameters forwarded with every completion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            temperature: crate::constants::DEFAULT_TEMPERATURE,
            max_tokens: crate::constants::DEFAULT_MAX_TOKENS,
        }
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the role-tagged messages and return the generated text.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}
