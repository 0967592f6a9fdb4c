pub mod bot;
pub mod chat;
pub mod completion;
pub mod config;
pub mod constants;
pub mod openai;
pub mod prompt;
pub mod sanitizer;

pub use bot::HealthBot;
pub use chat::{ChatSession, SessionEnd};
pub use completion::{ChatMessage, CompletionClient, CompletionError, CompletionSettings, Role};
pub use config::BackendConfig;
pub use openai::OpenAiClient;
pub use prompt::build_messages;
pub use sanitizer::{contains_unsafe_content, sanitize, DISCLAIMER, SAFETY_KEYWORDS};
