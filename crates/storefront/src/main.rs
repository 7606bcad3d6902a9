//! LevelUp Market storefront - interactive terminal session.
//!
//! Reads commands from stdin and prints rendered screens to stdout. Logs go
//! to stderr so they never interleave with the screens.
//!
//! # Architecture
//!
//! - `levelup-core` decides which listings are visible and what the
//!   assistant replies
//! - [`AppState`] holds the in-memory session (profile, wallet, history)
//! - Askama text templates render every screen
//! - Assistant replies arrive on a broadcast channel after the typing delay
//!   and are printed as soon as they land, even while waiting for input

#![cfg_attr(not(test), forbid(unsafe_code))]

use askama::Template;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use levelup_storefront::config::StorefrontConfig;
use levelup_storefront::shell::{self, Command};
use levelup_storefront::state::AppState;
use levelup_storefront::views::MessageTemplate;

const PROMPT: &[u8] = b"> ";
const HINT: &str = "Введите help для списка команд";

#[tokio::main]
async fn main() {
    // Load configuration first so RUST_LOG from .env is honoured
    let config = StorefrontConfig::from_env();

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "levelup_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = match config {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Storefront failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        reply_delay_ms = config.reply_delay.as_millis(),
        "Storefront session started"
    );

    let mut state = AppState::new(config);
    let mut replies = state.chat().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let welcome = shell::execute(&mut state, Command::Home).await?;
    write_block(&mut stdout, &welcome.output).await?;
    write_block(&mut stdout, HINT).await?;

    loop {
        stdout.write_all(PROMPT).await?;
        stdout.flush().await?;

        tokio::select! {
            line = lines.next_line() => {
                // EOF ends the session like `quit`
                let Some(line) = line? else { break };
                let outcome = shell::execute_line(&mut state, &line).await?;
                if !outcome.output.is_empty() {
                    write_block(&mut stdout, &outcome.output).await?;
                }
                if outcome.quit {
                    break;
                }
            }
            reply = replies.recv() => match reply {
                Ok(message) => {
                    let rendered = MessageTemplate::new(&message).render()?;
                    write_block(&mut stdout, &format!("\n{rendered}")).await?;
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Chat replies dropped from the live feed");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    // Cancel replies still in flight
    state.chat().reset().await;
    tracing::info!("Storefront session ended");
    Ok(())
}

async fn write_block(stdout: &mut Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
