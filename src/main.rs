//! chat-console entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Build the LLM provider (fatal if the API key is missing)
//!   5. Run the console loop until Ctrl-C or EOF

use tokio_util::sync::CancellationToken;
use tracing::info;

use chat_console::console::{self, ConsoleUi};
use chat_console::error::AppError;
use chat_console::llm::providers;
use chat_console::session::ChatSession;
use chat_console::{config, logger};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    info!(
        provider = %config.llm.provider,
        model = %config.llm.openai.model,
        log_level = %config.log_level,
        "config loaded"
    );

    let provider = providers::build(&config.llm, config.llm_api_key.clone())?;

    let mut session = ChatSession::new(&config.system_prompt, provider, ConsoleUi);

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        token.cancel();
    });

    console::run(&mut session, shutdown).await
}
