use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medibot::config::parse_temperature;
use medibot::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, FAILURE_MESSAGE,
};
use medibot::chat::wait_for_interrupt;
use medibot::{BackendConfig, ChatSession, CompletionSettings, SessionEnd};

// Define the command-line interface structure using clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Model identifier sent to the completion endpoint.
    #[arg(long, global = true, env = "MEDIBOT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// API key sent as a bearer token.
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of an OpenAI-compatible server.
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Sampling temperature between 0 and 1.
    #[arg(long, global = true, env = "MEDIBOT_TEMPERATURE", default_value = "0.7", value_parser = parse_temperature)]
    temperature: f32,

    /// Maximum number of tokens in each response.
    #[arg(long, global = true, env = "MEDIBOT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

// Define the available subcommands
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session (default).
    Chat,
    /// Ask a single health question and print the answer.
    Ask {
        /// The question to ask.
        query: String,
    },
}

impl Cli {
    fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            settings: CompletionSettings {
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for environment variables like API keys)
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the chat transcript.
    // RUST_LOG wins over --verbose when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("MediBot starting with command: {:?}", cli.command);

    let bot = cli.backend_config().build_bot();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let session = ChatSession::new(bot);
            let end = session
                .run(
                    BufReader::new(tokio::io::stdin()),
                    tokio::io::stdout(),
                    wait_for_interrupt(tokio::signal::ctrl_c()),
                )
                .await
                .context("Chat session failed")?;
            info!(?end, "Chat session finished");

            if end == SessionEnd::Interrupted {
                // tokio's stdin reader sits on a blocking thread that would keep
                // the runtime from shutting down until the next newline.
                std::process::exit(0);
            }
        }
        Commands::Ask { query } => match bot.generate_response(&query).await {
            Some(response) => println!("{}", response),
            None => {
                eprintln!("{}", FAILURE_MESSAGE);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["medibot"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.backend_config();
        assert_eq!(config.settings.max_tokens, 300);
        assert_eq!(config.settings.temperature, 0.7);
    }

    #[test]
    fn test_ask_parses_query_and_overrides() {
        let cli = Cli::try_parse_from([
            "medibot",
            "ask",
            "What causes a sore throat?",
            "--temperature",
            "0.2",
            "--max-tokens",
            "150",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Ask { ref query }) => assert_eq!(query, "What causes a sore throat?"),
            ref other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.temperature, 0.2);
        assert_eq!(cli.max_tokens, 150);
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let res = Cli::try_parse_from(["medibot", "--temperature", "1.5", "chat"]);
        assert!(res.is_err());
    }
}
