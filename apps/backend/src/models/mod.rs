//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from texcards-core
pub use texcards_core::{Flashcard, LectureSummary, Progress, RateOutcome, Rating};

use crate::services::sessions::SessionEntry;

// === Deck API Types ===

#[derive(Debug, Deserialize)]
pub struct CardsQuery {
    pub source: Option<String>,
}

/// Flashcards with question and answer already transcoded to HTML
#[derive(Debug, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<Flashcard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LecturesResponse {
    pub lectures: Vec<LectureSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub cards: usize,
    pub lectures: usize,
}

// === Session API Types ===

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Lecture files to quiz on; empty means all of them
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub shuffle: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RateRequest {
    pub rating: Rating,
}

/// Current card as seen by the client; the answer is withheld until revealed
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCard {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub source: String,
    pub line: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub progress: Progress,
    pub card: Option<SessionCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RateOutcome>,
}

impl SessionResponse {
    pub fn from_entry(id: Uuid, entry: &SessionEntry) -> Self {
        let session = &entry.session;
        let showing_answer = session.is_showing_answer();

        Self {
            id,
            started_at: entry.started_at,
            progress: session.progress(),
            card: session.current().map(|card| SessionCard {
                question: card.question.clone(),
                answer: showing_answer.then(|| card.answer.clone()),
                source: card.source.clone(),
                line: card.line,
            }),
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: RateOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}
