use tracing::{debug, error};

use crate::completion::{CompletionClient, CompletionSettings};
use crate::prompt::build_messages;
use crate::sanitizer::sanitize;

/// One question in, one sanitized answer (or nothing) out.
pub struct HealthBot<C> {
    client: C,
    settings: CompletionSettings,
}

impl<C> HealthBot<C> {
    pub fn new(client: C, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn settings(&self) -> CompletionSettings {
        self.settings
    }
}

impl<C: CompletionClient> HealthBot<C> {
    /// Ask the backend about `query` and return the sanitized reply.
    ///
    /// Any completion failure is logged here and reported as `None`; callers
    /// only decide what to show the user.
    pub async fn generate_response(&self, query: &str) -> Option<String> {
        let messages = build_messages(query);
        debug!(query, "Sending health query");

        match self
            .client
            .complete(&messages, self.settings.temperature, self.settings.max_tokens)
            .await
        {
            Ok(raw) => Some(sanitize(&raw)),
            Err(e) => {
                error!(error = %e, "Error generating response");
                None
            }
        }
    }
}
