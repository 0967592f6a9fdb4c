// Interactive console session.
// Reads one line per turn, hands it to the bot and prints whatever comes back.
// Input, output and the interrupt signal are injected so the loop can run
// against in-memory buffers in tests.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::bot::HealthBot;
use crate::completion::CompletionClient;
use crate::constants::{
    BOT_NAME, FAILURE_MESSAGE, GREETING, INPUT_PROMPT, INTERRUPT_FAREWELL, QUIT_FAREWELL,
    QUIT_TOKENS, USAGE_HINT,
};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    Interrupted,
}

pub fn is_quit_command(line: &str) -> bool {
    let line = line.trim();
    QUIT_TOKENS
        .iter()
        .any(|token| line.eq_ignore_ascii_case(token))
}

/// Resolve once `signal` fires. If the handler could not be installed the
/// returned future never resolves, so the session is not cut short.
pub async fn wait_for_interrupt<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "Could not listen for Ctrl-C; use a quit command to exit");
        std::future::pending::<()>().await;
    }
}

pub struct ChatSession<C> {
    bot: HealthBot<C>,
}

impl<C: CompletionClient> ChatSession<C> {
    pub fn new(bot: HealthBot<C>) -> Self {
        Self { bot }
    }

    /// Run the loop until a quit command, end of input, or `shutdown` resolves.
    ///
    /// Completion failures never end the session; only console I/O errors do.
    pub async fn run<R, W, S>(&self, mut input: R, mut output: W, shutdown: S) -> Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future,
    {
        tokio::pin!(shutdown);

        write_line(&mut output, GREETING).await?;
        write_line(&mut output, &format!("{}\n", USAGE_HINT)).await?;

        let mut turns = 0usize;
        loop {
            output.write_all(INPUT_PROMPT.as_bytes()).await?;
            output.flush().await?;

            let mut line = String::new();
            let read = tokio::select! {
                res = input.read_line(&mut line) => Some(res),
                _ = &mut shutdown => None,
            };

            let Some(read) = read else {
                info!(turns, "Interrupted, ending chat session");
                write_line(&mut output, &format!("\n{}", INTERRUPT_FAREWELL)).await?;
                return Ok(SessionEnd::Interrupted);
            };

            if read.context("Failed to read from console")? == 0 {
                info!(turns, "End of input, ending chat session");
                write_line(&mut output, &format!("\n{}", INTERRUPT_FAREWELL)).await?;
                return Ok(SessionEnd::EndOfInput);
            }

            let query = line.trim_end_matches(&['\r', '\n'][..]);

            if is_quit_command(query) {
                info!(turns, "Quit command received");
                write_line(&mut output, QUIT_FAREWELL).await?;
                return Ok(SessionEnd::Quit);
            }

            if query.trim().is_empty() {
                continue;
            }

            turns += 1;
            let response = tokio::select! {
                response = self.bot.generate_response(query) => response,
                _ = &mut shutdown => {
                    info!(turns, "Interrupted while waiting for a response");
                    write_line(&mut output, &format!("\n{}", INTERRUPT_FAREWELL)).await?;
                    return Ok(SessionEnd::Interrupted);
                }
            };

            match response {
                Some(text) => {
                    debug!(turn = turns, "Printing response");
                    write_line(&mut output, &format!("\n{}: {}\n", BOT_NAME, text)).await?;
                }
                None => write_line(&mut output, FAILURE_MESSAGE).await?,
            }
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await.context("Failed to write to console")
}
