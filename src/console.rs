//! Console presentation — reads lines from stdin, drives the session,
//! prints appended messages to stdout.
//!
//! The loop awaits each round-trip before prompting again, so conversation
//! appends are structurally single-producer. Runs until the `shutdown`
//! token is cancelled (Ctrl-C) or stdin is closed.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::session::{ChatSession, ChatUi};

/// Renders appended messages as `speaker: text` lines on stdout.
pub struct ConsoleUi;

impl ChatUi for ConsoleUi {
    fn message_appended(&self, speaker: &str, text: &str) {
        println!("{speaker}: {text}");
    }
}

/// Run the interactive loop until shutdown or EOF.
pub async fn run(
    session: &mut ChatSession<ConsoleUi>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    info!("console started — type a message and press Enter. Ctrl-C to quit.");
    println!("─────────────────────────────────");
    println!(" chat console  (Ctrl-C to quit)");
    println!("─────────────────────────────────");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("> ");
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                println!("\n[console] shutdown signal received");
                info!("console shutting down");
                break;
            }

            line = lines.next_line() => {
                match line {
                    Err(e) => {
                        warn!("stdin read error: {e}");
                        break;
                    }
                    Ok(None) => {
                        info!("stdin closed");
                        break;
                    }
                    Ok(Some(input)) => {
                        debug!(input = %input, "console received line");
                        // Blank lines are ignored inside submit — no append,
                        // no request.
                        session.submit(&input).await;
                    }
                }
            }
        }
    }

    Ok(())
}
