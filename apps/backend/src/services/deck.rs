//! Live deck snapshot with reload from disk.

use std::path::PathBuf;
use std::sync::Arc;

use texcards_core::{load_deck, Deck};
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};

/// Holds the current deck. Reload swaps the snapshot; sessions keep theirs.
pub struct DeckService {
    dir: PathBuf,
    current: RwLock<Arc<Deck>>,
}

impl DeckService {
    /// Load the deck from `dir`.
    pub async fn load(dir: PathBuf) -> Result<Self> {
        let deck = load_blocking(dir.clone()).await?;
        Ok(Self::from_deck(dir, deck))
    }

    pub fn from_deck(dir: PathBuf, deck: Deck) -> Self {
        Self {
            dir,
            current: RwLock::new(Arc::new(deck)),
        }
    }

    pub async fn snapshot(&self) -> Arc<Deck> {
        self.current.read().await.clone()
    }

    /// Re-read the lectures directory. On failure the current deck stays live.
    pub async fn reload(&self) -> Result<Arc<Deck>> {
        let deck = Arc::new(load_blocking(self.dir.clone()).await?);
        *self.current.write().await = deck.clone();

        tracing::info!(
            "Reloaded {} questions from {}",
            deck.len(),
            self.dir.display()
        );
        Ok(deck)
    }
}

async fn load_blocking(dir: PathBuf) -> Result<Deck> {
    let deck = tokio::task::spawn_blocking(move || load_deck(&dir))
        .await
        .map_err(|e| ApiError::Internal(format!("deck loader task failed: {e}")))??;
    Ok(deck)
}
