// Defaults for the completion backend and the fixed console text.
// Runtime overrides come from CLI flags / environment (see config.rs).

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

pub const BOT_NAME: &str = "MediBot";

pub const GREETING: &str =
    "MediBot: Hello! I'm your health information assistant. Ask me general health questions.";
pub const USAGE_HINT: &str = "Type 'quit' to exit.";
pub const INPUT_PROMPT: &str = "You: ";
pub const QUIT_FAREWELL: &str = "MediBot: Stay healthy! Goodbye.";
pub const INTERRUPT_FAREWELL: &str = "MediBot: Goodbye!";
pub const FAILURE_MESSAGE: &str = "MediBot: I encountered an error. Please try again.";

/// Lines that end the session, compared case-insensitively.
pub const QUIT_TOKENS: &[&str] = &["quit", "exit", "bye"];
