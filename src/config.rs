use tracing::{info, warn};

use crate::bot::HealthBot;
use crate::completion::CompletionSettings;
use crate::openai::OpenAiClient;

/// Everything needed to talk to the completion backend, resolved from CLI
/// flags and environment variables.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub settings: CompletionSettings,
}

impl BackendConfig {
    pub fn build_bot(self) -> HealthBot<OpenAiClient> {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            warn!("No API key configured (set OPENAI_API_KEY); requests are sent without authorization");
        }

        let client = OpenAiClient::new(&self.base_url, self.api_key, self.model);
        info!(
            url = client.url(),
            model = client.model(),
            temperature = self.settings.temperature,
            max_tokens = self.settings.max_tokens,
            "Completion backend configured"
        );
        HealthBot::new(client, self.settings)
    }
}

/// clap value parser: a float within `0.0..=1.0`.
pub fn parse_temperature(value: &str) -> Result<f32, String> {
    let temperature: f32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (0.0..=1.0).contains(&temperature) {
        Ok(temperature)
    } else {
        Err(format!("temperature must be between 0 and 1, got {}", temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_temperature_accepts_bounds() {
        assert_eq!(parse_temperature("0").unwrap(), 0.0);
        assert_eq!(parse_temperature("0.7").unwrap(), 0.7);
        assert_eq!(parse_temperature("1").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_temperature_rejects_out_of_range() {
        assert!(parse_temperature("1.5").is_err());
        assert!(parse_temperature("-0.1").is_err());
        assert!(parse_temperature("NaN").is_err());
        assert!(parse_temperature("warm").is_err());
    }

    #[test]
    fn test_build_bot_keeps_settings() {
        let config = BackendConfig {
            base_url: "http://localhost:1234/".to_string(),
            api_key: None,
            model: "local-model".to_string(),
            settings: CompletionSettings {
                temperature: 0.3,
                max_tokens: 42,
            },
        };
        let bot = config.build_bot();
        assert_eq!(bot.settings().max_tokens, 42);
        assert_eq!(bot.client().url(), "http://localhost:1234/v1/chat/completions");
        assert_eq!(bot.client().model(), "local-model");
    }
}
