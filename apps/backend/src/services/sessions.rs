//! In-memory store of quiz sessions, one per client.
//!
//! Sessions idle for longer than the store's timeout are swept on the next
//! insert and refused on access.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use texcards_core::QuizSession;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Default idle time before a session is dropped.
pub const DEFAULT_IDLE_TIMEOUT_MINUTES: u32 = 120;

/// A session plus bookkeeping.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub session: QuizSession,
    pub started_at: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

impl SessionEntry {
    fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_used >= timeout
    }
}

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::minutes(i64::from(DEFAULT_IDLE_TIMEOUT_MINUTES)))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Register a session and return its id with a copy of the entry.
    pub async fn insert(&self, session: QuizSession) -> (Uuid, SessionEntry) {
        self.evict_idle().await;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let entry = SessionEntry {
            session,
            started_at: now,
            last_used: now,
        };
        self.sessions.write().await.insert(id, entry.clone());

        tracing::debug!("Started quiz session {}", id);
        (id, entry)
    }

    /// Run `f` against a session. Returns `None` for an unknown or idle id.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut SessionEntry) -> T) -> Option<T> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        if sessions
            .get(&id)
            .is_some_and(|entry| entry.is_idle(now, self.idle_timeout))
        {
            sessions.remove(&id);
            tracing::debug!("Expired quiz session {}", id);
            return None;
        }

        sessions.get_mut(&id).map(|entry| {
            entry.last_used = now;
            f(entry)
        })
    }

    /// Drop every idle session. Returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle(now, self.idle_timeout));

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} idle quiz sessions", evicted);
        }
        evicted
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
