//! # `newsroom` binary
//!
//! ## Environment variables
//!
//! | Variable | Required | Description |
//! |--------|------|------|
//! | `NEWSROOM_API_URL` | **Yes** | Root of the remote API |
//! | `NEWSROOM_SESSION_FILE` | No | Session file (default `.newsroom-session.json`) |
//! | `LOG_FORMAT` | No | `json` or `pretty` |
//! | `RUST_LOG` | No | Log filter |
//!
//! ```bash
//! newsroom login alice redacteur
//! newsroom posts --content budget --from 2024-03-01
//! newsroom review reject 7 --reason "needs sources"
//! ```

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use newsroom_client::{
    cli::{self, Cli},
    config::ClientConfig,
    error::AppError,
    state::AppState,
};
use newsroom_shared::observability::{TracingConfig, init_tracing};
use tracing::Instrument as _;

/// Entry point
///
/// 1. Load `.env` if present
/// 2. Initialise tracing
/// 3. Read configuration
/// 4. Run the command
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let tracing_config = TracingConfig::from_env("newsroom");
    let service = tracing_config.service_name.clone();
    init_tracing(tracing_config);
    let span = tracing::info_span!("app", service = %service);

    let config = ClientConfig::from_env().context("failed to read configuration")?;
    let state = AppState::from_config(&config);

    match cli::execute(&state, cli.command).instrument(span).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report(err),
    }
}

/// Prints local refusals for the user; everything else becomes an `anyhow` error
fn report(err: AppError) -> anyhow::Result<ExitCode> {
    match err {
        AppError::AccessDenied { redirect, notice } => {
            if let Some(notice) = notice {
                eprintln!("{notice}");
            }
            eprintln!("-> {redirect}");
            Ok(ExitCode::FAILURE)
        }
        AppError::Validation(message) | AppError::Forbidden(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
        err @ (AppError::Api(_) | AppError::Session(_)) => {
            err.log("command");
            Err(err.into())
        }
    }
}
