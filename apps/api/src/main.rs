mod coach;
mod config;
mod errors;
mod jobs;
mod learning_path;
mod llm_client;
mod matching;
mod models;
mod resume;
mod routes;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::jobs::{AdzunaClient, JobBoard, MockJobBoard};
use crate::learning_path::{LearningPathGenerator, SkillCatalog};
use crate::llm_client::LlmClient;
use crate::routes::{build_router, cors::cors_layer};
use crate::state::AppState;
use crate::store::{HistoryStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Course catalog: file override or the built-in table
    let catalog = load_catalog(&config)?;
    if catalog.is_empty() {
        warn!("Course catalog is empty, every skill gets a placeholder course");
    } else {
        info!("Course catalog loaded ({} skills)", catalog.len());
    }

    // Job board: Adzuna when credentials are present, demo listings otherwise
    let job_board: Arc<dyn JobBoard> = match &config.adzuna {
        Some(credentials) => {
            info!("Job search via Adzuna ({})", config.adzuna_country);
            Arc::new(AdzunaClient::new(credentials.clone(), &config.adzuna_country)?)
        }
        None => {
            warn!("ADZUNA_APP_ID/ADZUNA_APP_KEY not set, serving demo job listings");
            Arc::new(MockJobBoard)
        }
    };

    let history = HistoryStore::new(config.history_path.clone());
    info!("History log at {}", history.path().display());

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        resumes: ResumeStore::new(),
        history,
        job_board,
        learning_paths: Arc::new(LearningPathGenerator::new(catalog)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.allowed_origins.clone()));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_catalog(config: &Config) -> Result<SkillCatalog> {
    let Some(path) = &config.course_catalog_path else {
        return Ok(SkillCatalog::builtin());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read course catalog {}", path.display()))?;
    SkillCatalog::from_json(&raw)
        .with_context(|| format!("Invalid course catalog {}", path.display()))
}
