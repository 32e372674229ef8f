mod config;
mod context;
mod domain;
mod error;
mod infra;
mod server;
mod services;
mod workflow;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::{JiraClient, OpenAiClient, UacClient};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(
    name = "onramp",
    author,
    version,
    about = "Onboarding ticket automation webhook"
)]
struct Cli {
    /// Override the listen port from the environment.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let port = cli.port.unwrap_or(config.port);

    let http = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|err| AppError::Configuration(format!("failed to build HTTP client: {err}")))?;

    let classifier = Arc::new(OpenAiClient::new(
        http.clone(),
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    ));
    let orchestrator = Arc::new(UacClient::new(
        http.clone(),
        config.uac_api_url.clone(),
        config.uac_api_token.clone(),
    ));
    let issue_tracker = Arc::new(JiraClient::new(
        http,
        config.jira_base_url.clone(),
        config.jira_user_email.clone(),
        config.jira_api_token.clone(),
        config.jira_done_transition_id.clone(),
    ));

    let ctx = AppContext::new(config, classifier, orchestrator, issue_tracker);
    let app = server::router(ctx);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("onramp listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
