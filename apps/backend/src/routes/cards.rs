//! Deck endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<CardsResponse>> {
    let deck = state.deck.snapshot().await;
    let cards: Vec<Flashcard> = match query.source.as_deref() {
        Some(source) => deck.cards_from(source).cloned().collect(),
        None => deck.cards().to_vec(),
    };
    Ok(Json(CardsResponse { cards }))
}

/// GET /api/lectures
pub async fn lectures(State(state): State<AppState>) -> Result<Json<LecturesResponse>> {
    let deck = state.deck.snapshot().await;
    Ok(Json(LecturesResponse {
        lectures: deck.lectures(),
    }))
}

/// POST /api/reload
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
    let deck = state.deck.reload().await?;
    Ok(Json(ReloadResponse {
        cards: deck.len(),
        lectures: deck.lectures().len(),
    }))
}
