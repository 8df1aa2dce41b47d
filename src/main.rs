mod client;
mod config;
mod error;
mod models;
mod prompt;
mod services;
mod session;
mod validation;

use client::ApiClient;
use config::Config;
use error::AppError;
use prompt::TerminalPrompter;
use session::Session;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_cancellation() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    log::debug!("Using leaderboard API at {}", config.api_base);
    let api = ApiClient::new(&config)?;
    Session::new(&api, TerminalPrompter::new(), std::io::stdout(), &config)
        .run()
        .await
}
