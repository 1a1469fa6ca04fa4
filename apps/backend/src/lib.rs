pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::services::deck::DeckService;
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<DeckService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(deck: DeckService) -> Self {
        Self::with_sessions(deck, SessionStore::new())
    }

    pub fn with_sessions(deck: DeckService, sessions: SessionStore) -> Self {
        Self {
            deck: Arc::new(deck),
            sessions: Arc::new(sessions),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Loading flashcards from {}...",
        config.lectures_dir.display()
    );
    let deck = match DeckService::load(config.lectures_dir.clone()).await {
        Ok(deck) => deck,
        Err(ApiError::Load(e)) if e.is_empty_deck() => {
            tracing::error!("No flashcards found, nothing to serve");
            return Err(e.into());
        }
        Err(e) => return Err(e).context("failed to load flashcards"),
    };

    let snapshot = deck.snapshot().await;
    tracing::info!(
        "Loaded {} questions from {} lecture files",
        snapshot.len(),
        snapshot.lectures().len()
    );

    let sessions = SessionStore::with_idle_timeout(config.session_idle_timeout);
    let app = router(AppState::with_sessions(deck, sessions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(health_check))
        // Deck routes
        .route("/api/cards", get(routes::cards::list))
        .route("/api/lectures", get(routes::cards::lectures))
        .route("/api/reload", post(routes::cards::reload))
        // Session routes
        .route("/api/sessions", post(routes::sessions::create))
        .route(
            "/api/sessions/:id",
            get(routes::sessions::get).delete(routes::sessions::remove),
        )
        .route("/api/sessions/:id/reveal", post(routes::sessions::reveal))
        .route("/api/sessions/:id/next", post(routes::sessions::next))
        .route("/api/sessions/:id/previous", post(routes::sessions::previous))
        .route("/api/sessions/:id/rate", post(routes::sessions::rate))
        .route("/api/sessions/:id/shuffle", post(routes::sessions::shuffle))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
