//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a lectures directory and test server
//! - Helper functions for writing lecture files

pub mod fixtures;

use std::path::Path;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use texcards_backend::services::deck::DeckService;
use texcards_backend::services::sessions::SessionStore;
use texcards_backend::{router, AppState};

/// Test context owning a temporary lectures directory and the app router.
pub struct TestContext {
    pub dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a context whose lectures directory holds `files`.
    ///
    /// # Panics
    /// Panics if the files cannot be written or contain no flashcards.
    pub async fn new(files: &[(&str, &str)]) -> Self {
        Self::with_session_store(files, SessionStore::new()).await
    }

    /// Like [`TestContext::new`], serving sessions from `sessions`.
    pub async fn with_session_store(files: &[(&str, &str)], sessions: SessionStore) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for (name, content) in files {
            write_lecture(dir.path(), name, content);
        }

        let deck = DeckService::load(dir.path().to_path_buf())
            .await
            .expect("Failed to load test lectures");
        let app = router(AppState::with_sessions(deck, sessions));

        Self { dir, app }
    }

    /// Context with the two standard sample lectures.
    pub async fn with_samples() -> Self {
        Self::new(&[
            ("lecture_01.tex", fixtures::LECTURE_01),
            ("lecture_02.tex", fixtures::LECTURE_02),
        ])
        .await
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    pub fn write(&self, name: &str, content: &str) {
        write_lecture(self.dir.path(), name, content);
    }
}

fn write_lecture(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("Failed to write lecture file");
}
