mod agents;
mod cli;
mod config;
mod directory;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod records;
mod repl;
mod response;
mod routes;
mod routing;
mod state;
mod text;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use tokio::io::BufReader;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agents::{Backend, HttpBackend};
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::directory::seed::seed_directory;
use crate::extraction::{CriteriaExtractor, KeywordExtractor, LlmCriteriaExtractor, Vocabulary};
use crate::llm_client::LlmClient;
use crate::models::hr::ROLE_LEVELS;
use crate::records::seed::RecordTables;
use crate::repl::{Modes, Repl, Session};
use crate::response::narrator::Narrator;
use crate::response::Renderer;
use crate::routes::auth::SharedSecret;
use crate::routes::{build_directory_router, build_records_router};
use crate::routing::QueryRouter;
use crate::state::{DirectoryState, RecordsState};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed or missing required env vars)
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout belongs to the interactive client
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_target}={level},tower_http={level}",
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting agent-router v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Directory { port } => run_directory(&config, port).await,
        Command::Records { port } => run_records(&config, port).await,
        Command::Client { llm } => run_client(&config, llm).await,
    }
}

async fn run_directory(config: &Config, port: Option<u16>) -> Result<()> {
    let employees = seed_directory();
    info!("Directory seeded with {} employees", employees.len());

    let extractor: Arc<dyn CriteriaExtractor> = match config.extraction_llm() {
        Some(llm_config) => {
            let llm = LlmClient::new(llm_config)?;
            info!("Criteria extraction: LLM (model: {})", llm.model());
            Arc::new(LlmCriteriaExtractor::directory(llm))
        }
        None => {
            info!("Criteria extraction: keyword");
            Arc::new(KeywordExtractor::new(Vocabulary::from_directory(&employees)))
        }
    };

    let state = DirectoryState {
        employees: employees.into(),
        extractor,
    };
    let app = build_directory_router(state, SharedSecret::new(&config.shared_secret));
    serve(app, port.unwrap_or(config.directory_port)).await
}

async fn run_records(config: &Config, port: Option<u16>) -> Result<()> {
    let tables = RecordTables::seeded();
    info!(
        "Records seeded: {} salaries, {} roles, {} schedules",
        tables.salaries.len(),
        tables.hierarchy.len(),
        tables.schedules.len()
    );

    let extractor: Arc<dyn CriteriaExtractor> = match config.extraction_llm() {
        Some(llm_config) => {
            let llm = LlmClient::new(llm_config)?;
            info!("Criteria extraction: LLM (model: {})", llm.model());
            Arc::new(LlmCriteriaExtractor::records(llm))
        }
        None => {
            info!("Criteria extraction: keyword");
            let roles = ROLE_LEVELS.iter().map(|(role, _, _)| *role);
            Arc::new(KeywordExtractor::new(Vocabulary::from_roles(roles)))
        }
    };

    let state = RecordsState {
        tables: Arc::new(tables),
        extractor,
    };
    let app = build_records_router(state, SharedSecret::new(&config.shared_secret));
    serve(app, port.unwrap_or(config.records_port)).await
}

async fn serve(app: Router, port: u16) -> Result<()> {
    let app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_client(config: &Config, use_llm: Option<bool>) -> Result<()> {
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(config)?);
    info!(
        "Client targets: directory={}, records={}",
        config.directory_url, config.records_url
    );

    let offline = Session::new(QueryRouter::offline(backend.clone()), Renderer::Template);
    let assisted = match &config.llm {
        Some(llm_config) => {
            let llm = LlmClient::new(llm_config)?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Session::new(
                QueryRouter::assisted(backend, llm.clone()),
                Renderer::Narrated(Narrator::new(llm)),
            ))
        }
        None => None,
    };

    let mut repl = Repl::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    repl.run(Modes { offline, assisted }, use_llm).await?;

    info!("Client exiting");
    Ok(())
}
