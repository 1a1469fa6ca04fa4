//! Server configuration from environment variables.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Duration;

use crate::services::sessions::DEFAULT_IDLE_TIMEOUT_MINUTES;

/// Runtime settings. `.env` is honoured through dotenvy.
///
/// - HOST: bind address (default `0.0.0.0`)
/// - PORT: bind port (default `5000`)
/// - LECTURES_DIR: directory holding `lecture_<n>.tex` files (default `lectures`)
/// - SESSION_IDLE_MINUTES: idle time before a quiz session is dropped (default `120`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub lectures_dir: PathBuf,
    pub session_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            None => 5000,
        };
        let lectures_dir = lookup("LECTURES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("lectures"));
        let idle_minutes = match lookup("SESSION_IDLE_MINUTES") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("invalid SESSION_IDLE_MINUTES value: {raw}"))?,
            None => DEFAULT_IDLE_TIMEOUT_MINUTES,
        };

        Ok(Self {
            host,
            port,
            lectures_dir,
            session_idle_timeout: Duration::minutes(i64::from(idle_minutes)),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
