//! Quiz session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use texcards_core::QuizSession;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::SessionEntry;
use crate::AppState;

/// POST /api/sessions
///
/// The body is optional; without one the session covers the whole deck in order.
pub async fn create(
    State(state): State<AppState>,
    payload: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();
    let deck = state.deck.snapshot().await;

    let mut session = QuizSession::new(deck, &payload.sources);
    if payload.shuffle {
        session.shuffle(&mut rand::rng());
    }

    let (id, entry) = state.sessions.insert(session).await;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_entry(id, &entry)),
    ))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    apply(&state, id, |_| {}).await
}

/// POST /api/sessions/:id/reveal
pub async fn reveal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    apply(&state, id, |entry| entry.session.toggle_answer()).await
}

/// POST /api/sessions/:id/next
pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    apply(&state, id, |entry| {
        entry.session.next();
    })
    .await
}

/// POST /api/sessions/:id/previous
pub async fn previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    apply(&state, id, |entry| {
        entry.session.previous();
    })
    .await
}

/// POST /api/sessions/:id/rate
pub async fn rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RateRequest>,
) -> Result<Json<SessionResponse>> {
    state
        .sessions
        .update(id, |entry| {
            let outcome = entry.session.rate(payload.rating);
            SessionResponse::from_entry(id, entry).with_outcome(outcome)
        })
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /api/sessions/:id/shuffle
pub async fn shuffle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    apply(&state, id, |entry| entry.session.shuffle(&mut rand::rng())).await
}

/// DELETE /api/sessions/:id
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if state.sessions.remove(id).await {
        tracing::debug!("Ended quiz session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

async fn apply(
    state: &AppState,
    id: Uuid,
    action: impl FnOnce(&mut SessionEntry),
) -> Result<Json<SessionResponse>> {
    state
        .sessions
        .update(id, |entry| {
            action(entry);
            SessionResponse::from_entry(id, entry)
        })
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session {} not found", id))
}
